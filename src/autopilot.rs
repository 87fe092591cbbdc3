//! Idle/demo player
//!
//! Walks toward the goal on green and lets go shortly before the signal
//! flips. Reads the frame view like a renderer would and pushes input through
//! the same `press`/`release` surface as a real input source.

use crate::consts::SIM_DT;
use crate::sim::{Direction, DwellSampler, InputSource, Session, SessionState, SignalPhase};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Release when this much time (or less) is left before the signal flips.
    /// Anything below one tick risks moving on red.
    pub caution: f32,
    source: InputSource,
    holding: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(3.0 * SIM_DT)
    }
}

impl Autopilot {
    pub fn new(caution: f32) -> Self {
        Self {
            caution: caution.max(0.0),
            source: InputSource::Pointer,
            holding: false,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Update held input for the coming tick
    pub fn drive<D: DwellSampler>(&mut self, session: &mut Session<D>) {
        let view = session.view();
        let go = view.state == SessionState::Running
            && view.phase == SignalPhase::Permitted
            && view.phase_remaining > self.caution;

        let held = session.input().is_held_by(self.source, Direction::Up);
        if go && !held {
            session.press(self.source, Direction::Up);
        } else if !go && held {
            session.release(self.source, Direction::Up);
        }
        self.holding = session.input().is_held_by(self.source, Direction::Up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{GameEvent, ScriptedDwell, Verdict, tick};

    fn play<D: DwellSampler>(session: &mut Session<D>, pilot: &mut Autopilot) -> Vec<GameEvent> {
        session.restart();
        let mut events = Vec::new();
        while session.state() == SessionState::Running {
            pilot.drive(session);
            events.extend(tick(session, SIM_DT));
        }
        events
    }

    #[test]
    fn test_cautious_pilot_wins_fixed_dwell() {
        let mut session =
            Session::with_sampler(&Settings::default(), ScriptedDwell::constant(1.5), 3);
        let mut pilot = Autopilot::default();
        let events = play(&mut session, &mut pilot);

        assert_eq!(session.state(), SessionState::Won);
        assert!(matches!(events.last(), Some(GameEvent::Won { .. })));
        assert!(session.remaining() > 0.0);
    }

    #[test]
    fn test_reckless_pilot_moves_on_red() {
        let mut session =
            Session::with_sampler(&Settings::default(), ScriptedDwell::constant(1.5), 3);
        let mut pilot = Autopilot::new(0.0);
        let events = play(&mut session, &mut pilot);

        assert_eq!(session.state(), SessionState::Eliminated);
        assert!(matches!(
            events.last(),
            Some(GameEvent::Eliminated { cause: Verdict::Violation, .. })
        ));
    }

    #[test]
    fn test_cautious_pilot_never_violates() {
        let settings = Settings::default();
        for seed in 0..32 {
            let mut session = Session::new(&settings, seed);
            let mut pilot = Autopilot::default();
            let events = play(&mut session, &mut pilot);
            assert!(
                !events.iter().any(|e| matches!(
                    e,
                    GameEvent::Eliminated { cause: Verdict::Violation, .. }
                )),
                "seed {seed} moved on red"
            );
        }
    }

    #[test]
    fn test_pilot_idle_when_not_running() {
        let mut session =
            Session::with_sampler(&Settings::default(), ScriptedDwell::constant(1.5), 3);
        let mut pilot = Autopilot::default();
        pilot.drive(&mut session);
        assert!(!pilot.is_holding());
        assert!(session.input().is_empty());
    }
}

//! Session state and read-only views
//!
//! A [`Session`] owns every piece of per-run state. Collaborators push input
//! through `press`/`release`, drive it with [`super::tick`], and read
//! [`Session::view`] to paint a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::detect::{Snapshot, Verdict};
use super::input::{Direction, InputAggregator, InputSource};
use super::movement::Arena;
use super::particles::{BurstParams, ExplosionSystem, Particle};
use super::phase::{DwellSampler, PhaseController, RandomDwell, SignalPhase};
use super::timer::Countdown;
use crate::settings::Settings;

/// Overall run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the first start command
    #[default]
    NotStarted,
    Running,
    Eliminated,
    Won,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Eliminated | SessionState::Won)
    }
}

/// Something collaborators may want to react to (logging, sound, UI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    PhaseChanged(SignalPhase),
    Eliminated { cause: Verdict, at: Vec2 },
    Won { at: Vec2 },
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub state: SessionState,
    pub phase: SignalPhase,
    pub position: Vec2,
    pub remaining: f32,
    /// Time until the signal flips
    pub phase_remaining: f32,
    pub particles: &'a [Particle],
}

impl FrameView<'_> {
    /// The avatar is replaced by the burst once eliminated
    pub fn avatar_visible(&self) -> bool {
        self.state != SessionState::Eliminated
    }

    pub fn timer_text(&self) -> String {
        crate::format_timer(self.remaining)
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.state {
            SessionState::Eliminated => Some("ELIMINATED"),
            SessionState::Won => Some("YOU WIN"),
            SessionState::NotStarted | SessionState::Running => None,
        }
    }

    /// Label for the single start/restart control
    pub fn command_label(&self) -> &'static str {
        match self.state {
            SessionState::NotStarted => "Start Game",
            _ => "Restart Game",
        }
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Session<D = RandomDwell> {
    pub(super) state: SessionState,
    pub(super) position: Vec2,
    pub(super) input: InputAggregator,
    pub(super) phase: PhaseController<D>,
    pub(super) timer: Countdown,
    pub(super) explosion: ExplosionSystem,
    pub(super) arena: Arena,
    pub(super) start: Vec2,
    pub(super) goal_y: f32,
    pub(super) move_step: f32,
    /// Simulation tick counter (since last restart)
    pub(super) time_ticks: u64,
}

impl Session<RandomDwell> {
    /// Session with random dwell timing; `seed` drives signal and burst RNG
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let dwell = RandomDwell::new(seed, settings.dwell_min, settings.dwell_max);
        Self::with_sampler(settings, dwell, seed)
    }
}

impl<D: DwellSampler> Session<D> {
    /// Session with a caller-supplied dwell sampler
    pub fn with_sampler(settings: &Settings, sampler: D, seed: u64) -> Self {
        Self {
            state: SessionState::NotStarted,
            position: settings.start_position(),
            input: InputAggregator::new(),
            phase: PhaseController::new(sampler),
            timer: Countdown::new(settings.time_budget),
            // Separate stream so burst randomness never shifts signal timing
            explosion: ExplosionSystem::new(BurstParams::from(settings), seed.wrapping_add(1)),
            arena: settings.arena(),
            start: settings.start_position(),
            goal_y: settings.goal_y,
            move_step: settings.move_step,
            time_ticks: 0,
        }
    }

    /// Start or restart the run. Safe to call in any state.
    pub fn restart(&mut self) -> GameEvent {
        self.position = self.start;
        self.state = SessionState::Running;
        self.timer.reset();
        self.phase.reset();
        self.input.clear();
        self.explosion.clear();
        self.time_ticks = 0;
        log::info!(
            "Run started: {} budget, first green lasts {:.2}s",
            crate::format_timer(self.timer.budget()),
            self.phase.dwell()
        );
        GameEvent::Started
    }

    /// Hold a direction. Ignored unless the run is live.
    pub fn press(&mut self, source: InputSource, dir: Direction) {
        if self.state == SessionState::Running {
            self.input.assert(source, dir);
        }
    }

    /// Release a direction. Always accepted.
    pub fn release(&mut self, source: InputSource, dir: Direction) {
        self.input.retract(source, dir);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase.phase()
    }

    pub fn remaining(&self) -> f32 {
        self.timer.remaining()
    }

    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    pub fn particles(&self) -> &[Particle] {
        self.explosion.particles()
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Detection snapshot of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            phase: self.phase.phase(),
            moving: !self.input.is_empty(),
            pos: self.position,
            goal_y: self.goal_y,
            expired: self.timer.is_expired(),
        }
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            state: self.state,
            phase: self.phase.phase(),
            position: self.position,
            remaining: self.timer.remaining(),
            phase_remaining: self.phase.remaining(),
            particles: self.explosion.particles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::phase::ScriptedDwell;

    fn session() -> Session<ScriptedDwell> {
        Session::with_sampler(&Settings::default(), ScriptedDwell::constant(1.5), 1)
    }

    #[test]
    fn test_new_session_not_started() {
        let s = session();
        assert_eq!(s.state(), SessionState::NotStarted);
        assert_eq!(s.position(), Vec2::new(200.0, 480.0));
        assert_eq!(s.remaining(), 10.0);
        assert_eq!(s.phase(), SignalPhase::Permitted);
        assert_eq!(s.view().command_label(), "Start Game");
        assert_eq!(s.view().banner(), None);
    }

    #[test]
    fn test_press_ignored_before_start() {
        let mut s = session();
        s.press(InputSource::Keyboard, Direction::Up);
        assert!(s.input().is_empty());

        s.restart();
        s.press(InputSource::Keyboard, Direction::Up);
        assert!(s.input().is_active(Direction::Up));
        assert_eq!(s.view().command_label(), "Restart Game");
    }

    #[test]
    fn test_release_always_accepted() {
        let mut s = session();
        s.restart();
        s.press(InputSource::Pointer, Direction::Left);
        s.state = SessionState::Won;
        s.release(InputSource::Pointer, Direction::Left);
        assert!(s.input().is_empty());
    }

    #[test]
    fn test_view_banner_and_avatar() {
        let mut s = session();
        s.restart();
        assert!(s.view().avatar_visible());
        assert_eq!(s.view().timer_text(), "10.00s");

        s.state = SessionState::Eliminated;
        assert!(!s.view().avatar_visible());
        assert_eq!(s.view().banner(), Some("ELIMINATED"));

        s.state = SessionState::Won;
        assert!(s.view().avatar_visible());
        assert_eq!(s.view().banner(), Some("YOU WIN"));
    }

    #[test]
    fn test_snapshot_reflects_input() {
        let mut s = session();
        s.restart();
        assert!(!s.snapshot().moving);
        s.press(InputSource::Keyboard, Direction::Down);
        assert!(s.snapshot().moving);
        assert_eq!(s.snapshot().goal_y, 90.0);
    }

    #[test]
    fn test_snapshot_reports_expired_timer() {
        let mut s = session();
        s.restart();
        assert!(!s.snapshot().expired);
        s.timer.tick(10.0);
        assert!(s.snapshot().expired);
    }
}

//! Per-tick update
//!
//! Order within a tick: movement, signal phase, countdown, detection, then
//! particles. Particles update even after the run has ended so the burst
//! finishes animating.

use super::detect;
use super::movement;
use super::phase::DwellSampler;
use super::state::{GameEvent, Session, SessionState};

/// Advance the session by one tick of `dt` seconds
pub fn tick<D: DwellSampler>(session: &mut Session<D>, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.state == SessionState::Running {
        session.time_ticks += 1;

        session.position = movement::integrate(
            session.position,
            &session.input,
            session.move_step,
            &session.arena,
        );

        if let Some(phase) = session.phase.update(dt) {
            events.push(GameEvent::PhaseChanged(phase));
        }

        session.timer.tick(dt);

        if let Some(verdict) = detect::evaluate(&session.snapshot()) {
            let at = session.position;
            session.state = verdict.outcome();
            if verdict.explodes() {
                session.explosion.spawn_burst(at);
                log::info!(
                    "Eliminated at ({:.0}, {:.0}): {} with {} left",
                    at.x,
                    at.y,
                    verdict.as_str(),
                    crate::format_timer(session.timer.remaining())
                );
                events.push(GameEvent::Eliminated { cause: verdict, at });
            } else {
                log::info!(
                    "Won with {} left after {} ticks",
                    crate::format_timer(session.timer.remaining()),
                    session.time_ticks
                );
                events.push(GameEvent::Won { at });
            }
        }
    }

    session.explosion.update();
    events
}

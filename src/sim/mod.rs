//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Input is read only at tick boundaries
//! - No rendering or platform dependencies

pub mod detect;
pub mod input;
pub mod movement;
pub mod particles;
pub mod phase;
pub mod state;
pub mod tick;
pub mod timer;

pub use detect::{Snapshot, Verdict};
pub use input::{Direction, InputAggregator, InputSource};
pub use movement::Arena;
pub use particles::{ExplosionSystem, Particle};
pub use phase::{DwellSampler, PhaseController, RandomDwell, ScriptedDwell, SignalPhase};
pub use state::{FrameView, GameEvent, Session, SessionState};
pub use tick::tick;
pub use timer::Countdown;

//! Platform abstraction layer
//!
//! Turns whatever the host provides (frame callbacks, timers) into the fixed
//! ticks the simulation expects.

pub mod clock;

pub use clock::FixedStepClock;

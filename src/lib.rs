//! Red Light, Green Light - a reflex arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (signal phases, movement, detection, particles)
//! - `platform`: Tick source helpers (fixed-step clock)
//! - `settings`: Data-driven game tuning
//! - `autopilot`: Demo player that drives the input aggregator

pub mod autopilot;
pub mod platform;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one movement step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Avatar radius; also the margin kept from the arena edges
    pub const AVATAR_RADIUS: f32 = 20.0;
    /// Reaching this y (or above) wins the run
    pub const GOAL_Y: f32 = 90.0;
    /// Where the avatar stands on start/restart
    pub const START_X: f32 = 200.0;
    pub const START_Y: f32 = 480.0;
    /// Distance moved per tick per active direction
    pub const MOVE_STEP: f32 = 2.0;

    /// Total time budget (seconds)
    pub const TIME_BUDGET: f32 = 10.0;
    /// Signal dwell range (seconds)
    pub const DWELL_MIN: f32 = 1.0;
    pub const DWELL_MAX: f32 = 2.0;

    /// Explosion burst
    pub const BURST_COUNT: usize = 50;
    pub const PARTICLE_SPEED_MIN: f32 = 2.0;
    pub const PARTICLE_SPEED_MAX: f32 = 5.0;
    pub const PARTICLE_SIZE_MIN: f32 = 4.0;
    pub const PARTICLE_SIZE_MAX: f32 = 12.0;
    /// Per-tick decay
    pub const PARTICLE_SIZE_DECAY: f32 = 0.5;
    pub const PARTICLE_LIFE_DECAY: f32 = 0.02;
}

/// Format remaining seconds for the HUD (e.g. `"9.87s"`)
#[inline]
pub fn format_timer(seconds: f32) -> String {
    format!("{:.2}s", seconds.max(0.0))
}

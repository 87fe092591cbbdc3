//! Game tuning and preferences
//!
//! Every gameplay constant lives here so a run can be reshaped from a JSON
//! file without recompiling. Defaults match `crate::consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Arena;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Avatar radius (edge margin for clamping)
    pub avatar_radius: f32,
    /// Goal line; y at or above this wins
    pub goal_y: f32,
    /// Start position
    pub start: Vec2,
    /// Per-tick movement step
    pub move_step: f32,

    // === Timing ===
    /// Total run budget (seconds)
    pub time_budget: f32,
    /// Signal dwell range (seconds, inclusive)
    pub dwell_min: f32,
    pub dwell_max: f32,

    // === Explosion ===
    pub burst_count: usize,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_size_min: f32,
    pub particle_size_max: f32,
    pub particle_size_decay: f32,
    pub particle_life_decay: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            avatar_radius: AVATAR_RADIUS,
            goal_y: GOAL_Y,
            start: Vec2::new(START_X, START_Y),
            move_step: MOVE_STEP,

            time_budget: TIME_BUDGET,
            dwell_min: DWELL_MIN,
            dwell_max: DWELL_MAX,

            burst_count: BURST_COUNT,
            particle_speed_min: PARTICLE_SPEED_MIN,
            particle_speed_max: PARTICLE_SPEED_MAX,
            particle_size_min: PARTICLE_SIZE_MIN,
            particle_size_max: PARTICLE_SIZE_MAX,
            particle_size_decay: PARTICLE_SIZE_DECAY,
            particle_life_decay: PARTICLE_LIFE_DECAY,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        if !(self.avatar_radius >= 0.0) {
            return invalid("avatar_radius", "must be non-negative");
        }
        if !(self.arena_width > 2.0 * self.avatar_radius) {
            return invalid("arena_width", "must exceed the avatar diameter");
        }
        if !(self.arena_height > 2.0 * self.avatar_radius) {
            return invalid("arena_height", "must exceed the avatar diameter");
        }
        if !(self.goal_y >= self.avatar_radius
            && self.goal_y < self.arena_height - self.avatar_radius)
        {
            return invalid("goal_y", "must lie inside the arena margins");
        }
        if !(self.move_step > 0.0) {
            return invalid("move_step", "must be positive");
        }
        if !(self.time_budget > 0.0) {
            return invalid("time_budget", "must be positive");
        }
        if !(self.dwell_min > 0.0) {
            return invalid("dwell_min", "must be positive");
        }
        if !(self.dwell_max >= self.dwell_min) {
            return invalid("dwell_max", "must be at least dwell_min");
        }
        if !(self.particle_speed_max > self.particle_speed_min) {
            return invalid("particle_speed_max", "must exceed particle_speed_min");
        }
        if !(self.particle_size_min > 0.0 && self.particle_size_max > self.particle_size_min) {
            return invalid("particle_size_max", "must exceed a positive particle_size_min");
        }
        if !(self.particle_size_decay > 0.0) {
            return invalid("particle_size_decay", "must be positive");
        }
        if !(self.particle_life_decay > 0.0) {
            return invalid("particle_life_decay", "must be positive");
        }
        Ok(())
    }

    /// Clamping bounds for the avatar centre
    pub fn arena(&self) -> Arena {
        let margin = Vec2::splat(self.avatar_radius);
        Arena {
            min: Vec2::new(0.0, self.goal_y.max(0.0)).max(margin),
            max: Vec2::new(self.arena_width, self.arena_height) - margin,
        }
    }

    /// Start position clamped into the arena
    pub fn start_position(&self) -> Vec2 {
        self.arena().clamp(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_default_arena_bounds() {
        let arena = Settings::default().arena();
        assert_eq!(arena.min, Vec2::new(20.0, 90.0));
        assert_eq!(arena.max, Vec2::new(380.0, 480.0));
        assert_eq!(Settings::default().start_position(), Vec2::new(200.0, 480.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "time_budget": 5.0 }"#).unwrap();
        assert_eq!(settings.time_budget, 5.0);
        assert_eq!(settings.burst_count, BURST_COUNT);
        assert_eq!(settings.dwell_max, DWELL_MAX);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            dwell_min: 0.5,
            dwell_max: 0.5,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_inverted_dwell_range() {
        let err = Settings::from_json(r#"{ "dwell_min": 2.0, "dwell_max": 1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "dwell_max", .. }));
    }

    #[test]
    fn test_rejects_nan_budget() {
        let settings = Settings {
            time_budget: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_unreachable_goal() {
        // Above the top margin: the avatar can never get that high
        let err = Settings::from_json(r#"{ "goal_y": 10.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "goal_y", .. }));

        // At or below the bottom margin the arena would be inverted
        let err = Settings::from_json(r#"{ "goal_y": 480.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "goal_y", .. }));

        let settings = Settings {
            goal_y: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        // Right on the top margin is still reachable
        assert!(Settings::from_json(r#"{ "goal_y": 20.0 }"#).is_ok());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = Settings::load("/nonexistent/red-light-settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}

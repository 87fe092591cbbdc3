//! Avatar movement integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::{Direction, InputAggregator};

/// Axis-aligned bounds for the avatar centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub min: Vec2,
    pub max: Vec2,
}

impl Arena {
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.min, self.max)
    }

    #[cfg(test)]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

/// Unit offset for a direction (y grows downward)
#[inline]
pub fn direction_offset(dir: Direction) -> Vec2 {
    match dir {
        Direction::Up => Vec2::NEG_Y,
        Direction::Down => Vec2::Y,
        Direction::Left => Vec2::NEG_X,
        Direction::Right => Vec2::X,
    }
}

/// Move `pos` one step along every active direction, clamped per axis.
///
/// Diagonals are not normalized: holding up+right moves `step` on both axes.
pub fn integrate(pos: Vec2, input: &InputAggregator, step: f32, arena: &Arena) -> Vec2 {
    let delta: Vec2 = input.active().map(direction_offset).sum();
    arena.clamp(pos + delta * step)
}

//! Direction input aggregation
//!
//! Each input source keeps its own held-direction set; the active set is the
//! union. Releasing a direction on one source never cancels the same direction
//! still held on another.

use serde::{Deserialize, Serialize};

/// Movement direction token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Where a direction assertion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    /// Held keys
    Keyboard,
    /// On-screen buttons (touch or mouse)
    Pointer,
}

impl InputSource {
    pub const ALL: [InputSource; 2] = [InputSource::Keyboard, InputSource::Pointer];

    const fn index(self) -> usize {
        match self {
            InputSource::Keyboard => 0,
            InputSource::Pointer => 1,
        }
    }
}

const DIRECTION_COUNT: usize = Direction::ALL.len();
const SOURCE_COUNT: usize = InputSource::ALL.len();

/// Union of held directions across all input sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputAggregator {
    held: [[bool; DIRECTION_COUNT]; SOURCE_COUNT],
}

impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `dir` as held by `source` (idempotent)
    pub fn assert(&mut self, source: InputSource, dir: Direction) {
        self.held[source.index()][dir.index()] = true;
    }

    /// Release `dir` on `source`; a no-op if it was not held
    pub fn retract(&mut self, source: InputSource, dir: Direction) {
        self.held[source.index()][dir.index()] = false;
    }

    /// Release everything on every source
    pub fn clear(&mut self) {
        self.held = Default::default();
    }

    /// True if any source holds `dir`
    pub fn is_active(&self, dir: Direction) -> bool {
        self.held.iter().any(|source| source[dir.index()])
    }

    pub fn is_held_by(&self, source: InputSource, dir: Direction) -> bool {
        self.held[source.index()][dir.index()]
    }

    pub fn is_empty(&self) -> bool {
        !Direction::ALL.iter().any(|&dir| self.is_active(dir))
    }

    /// Active directions in a stable order
    pub fn active(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_active(dir))
    }
}

//! Run countdown

use serde::{Deserialize, Serialize};

/// Remaining time budget (seconds), never negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    budget: f32,
    remaining: f32,
}

impl Countdown {
    pub fn new(budget: f32) -> Self {
        let budget = budget.max(0.0);
        Self {
            budget,
            remaining: budget,
        }
    }

    /// Refill to the full budget
    pub fn reset(&mut self) {
        self.remaining = self.budget;
    }

    /// Subtract `dt`, saturating at zero
    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn budget(&self) -> f32 {
        self.budget
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

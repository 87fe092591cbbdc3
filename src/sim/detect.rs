//! End-of-run detection
//!
//! Rules are pure functions over one [`Snapshot`] taken after movement, phase
//! and timer have advanced. They run in a fixed order and the first match wins:
//! violation, then reaching the goal, then timeout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::phase::SignalPhase;
use super::state::SessionState;

/// Immutable view of everything the rules look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub state: SessionState,
    pub phase: SignalPhase,
    /// Any direction currently held
    pub moving: bool,
    pub pos: Vec2,
    pub goal_y: f32,
    /// Countdown has reached zero
    pub expired: bool,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Moved while the signal was red
    Violation,
    ReachedGoal,
    TimedOut,
}

impl Verdict {
    /// Terminal state this verdict leads to
    pub fn outcome(self) -> SessionState {
        match self {
            Verdict::Violation | Verdict::TimedOut => SessionState::Eliminated,
            Verdict::ReachedGoal => SessionState::Won,
        }
    }

    /// Whether the failure burst should fire
    pub fn explodes(self) -> bool {
        self.outcome() == SessionState::Eliminated
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Violation => "moved on red",
            Verdict::ReachedGoal => "reached the goal",
            Verdict::TimedOut => "ran out of time",
        }
    }
}

pub type Rule = fn(&Snapshot) -> Option<Verdict>;

/// Evaluation order is the tie-break
pub const RULES: [Rule; 3] = [violation, reached_goal, timed_out];

pub fn violation(snap: &Snapshot) -> Option<Verdict> {
    (snap.state == SessionState::Running && snap.phase == SignalPhase::Forbidden && snap.moving)
        .then_some(Verdict::Violation)
}

pub fn reached_goal(snap: &Snapshot) -> Option<Verdict> {
    (snap.state == SessionState::Running && snap.pos.y <= snap.goal_y)
        .then_some(Verdict::ReachedGoal)
}

pub fn timed_out(snap: &Snapshot) -> Option<Verdict> {
    (snap.state == SessionState::Running && snap.expired).then_some(Verdict::TimedOut)
}

/// First matching rule, if any
pub fn evaluate(snap: &Snapshot) -> Option<Verdict> {
    RULES.iter().find_map(|rule| rule(snap))
}

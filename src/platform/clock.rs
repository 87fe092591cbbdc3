//! Fixed timestep accumulator

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Converts variable frame deltas into whole simulation steps
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed time; returns how many steps to simulate.
    ///
    /// Long frames (tab switches, debugger pauses) are clamped, and leftover
    /// time beyond the substep cap is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Forget any partial step (on restart or resume)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStepClock::new(0.25, 8);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 1);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedStepClock::new(0.01, 4);
        assert_eq!(clock.advance(0.1), 4);
        // Backlog was dropped
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_clamps_long_and_negative_frames() {
        let mut clock = FixedStepClock::new(0.04, 100);
        assert_eq!(clock.advance(5.0), 2);
        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FixedStepClock::new(0.25, 8);
        clock.advance(0.2);
        clock.reset();
        assert_eq!(clock.advance(0.1), 0);
    }
}

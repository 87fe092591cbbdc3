//! Signal phase scheduling
//!
//! The signal alternates between `Permitted` and `Forbidden`. Each phase lasts
//! for a dwell duration drawn from a [`DwellSampler`] when the phase is entered.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Movement signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignalPhase {
    /// Green light
    #[default]
    Permitted,
    /// Red light
    Forbidden,
}

impl SignalPhase {
    pub fn flipped(self) -> Self {
        match self {
            SignalPhase::Permitted => SignalPhase::Forbidden,
            SignalPhase::Forbidden => SignalPhase::Permitted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalPhase::Permitted => "green",
            SignalPhase::Forbidden => "red",
        }
    }
}

/// Source of phase dwell durations (seconds)
pub trait DwellSampler {
    fn next_dwell(&mut self) -> f32;
}

/// Uniform dwell in `[min, max]` from a seeded RNG
#[derive(Debug, Clone)]
pub struct RandomDwell {
    rng: Pcg32,
    min: f32,
    max: f32,
}

impl RandomDwell {
    pub fn new(seed: u64, min: f32, max: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min: min.min(max),
            max: max.max(min),
        }
    }
}

impl DwellSampler for RandomDwell {
    fn next_dwell(&mut self) -> f32 {
        self.rng.random_range(self.min..=self.max)
    }
}

/// Cycles through a fixed list of durations (deterministic runs and tests)
#[derive(Debug, Clone)]
pub struct ScriptedDwell {
    durations: Vec<f32>,
    next: usize,
}

impl ScriptedDwell {
    /// Panics if `durations` is empty.
    pub fn new(durations: impl Into<Vec<f32>>) -> Self {
        let durations = durations.into();
        assert!(!durations.is_empty(), "ScriptedDwell needs at least one duration");
        Self { durations, next: 0 }
    }

    /// Every phase lasts `seconds`
    pub fn constant(seconds: f32) -> Self {
        Self::new(vec![seconds])
    }
}

impl DwellSampler for ScriptedDwell {
    fn next_dwell(&mut self) -> f32 {
        let dwell = self.durations[self.next];
        self.next = (self.next + 1) % self.durations.len();
        dwell
    }
}

/// Alternating signal with its current dwell deadline
#[derive(Debug, Clone)]
pub struct PhaseController<D> {
    phase: SignalPhase,
    /// Duration of the current phase
    dwell: f32,
    /// Time spent in the current phase
    elapsed: f32,
    sampler: D,
}

impl<D: DwellSampler> PhaseController<D> {
    pub fn new(mut sampler: D) -> Self {
        let dwell = sampler.next_dwell();
        Self {
            phase: SignalPhase::Permitted,
            dwell,
            elapsed: 0.0,
            sampler,
        }
    }

    /// Back to `Permitted` with a freshly drawn dwell
    pub fn reset(&mut self) {
        self.phase = SignalPhase::Permitted;
        self.dwell = self.sampler.next_dwell();
        self.elapsed = 0.0;
    }

    /// Advance by `dt`. Returns the new phase if it flipped.
    pub fn update(&mut self, dt: f32) -> Option<SignalPhase> {
        self.elapsed += dt;
        if self.elapsed < self.dwell {
            return None;
        }

        self.phase = self.phase.flipped();
        self.dwell = self.sampler.next_dwell();
        self.elapsed = 0.0;
        log::debug!("Signal turned {} for {:.2}s", self.phase.as_str(), self.dwell);
        Some(self.phase)
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase
    }

    pub fn dwell(&self) -> f32 {
        self.dwell
    }

    /// Time until the next flip
    pub fn remaining(&self) -> f32 {
        (self.dwell - self.elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_permitted() {
        let ctrl = PhaseController::new(ScriptedDwell::constant(1.0));
        assert_eq!(ctrl.phase(), SignalPhase::Permitted);
        assert_eq!(ctrl.dwell(), 1.0);
        assert_eq!(ctrl.remaining(), 1.0);
    }

    #[test]
    fn test_flips_when_dwell_reached() {
        let mut ctrl = PhaseController::new(ScriptedDwell::new(vec![1.0, 0.5]));
        assert_eq!(ctrl.update(0.75), None);
        assert!((ctrl.remaining() - 0.25).abs() < 1e-6);

        assert_eq!(ctrl.update(0.25), Some(SignalPhase::Forbidden));
        assert_eq!(ctrl.dwell(), 0.5);

        assert_eq!(ctrl.update(0.5), Some(SignalPhase::Permitted));
        assert_eq!(ctrl.dwell(), 1.0);
    }

    #[test]
    fn test_reset_redraws_dwell() {
        let mut ctrl = PhaseController::new(ScriptedDwell::new(vec![1.0, 2.0, 3.0]));
        ctrl.update(1.0);
        assert_eq!(ctrl.phase(), SignalPhase::Forbidden);

        ctrl.reset();
        assert_eq!(ctrl.phase(), SignalPhase::Permitted);
        assert_eq!(ctrl.dwell(), 3.0);
        assert_eq!(ctrl.remaining(), 3.0);
    }

    #[test]
    fn test_random_dwell_in_range() {
        let mut sampler = RandomDwell::new(7, 1.0, 2.0);
        for _ in 0..1000 {
            let dwell = sampler.next_dwell();
            assert!((1.0..=2.0).contains(&dwell), "dwell {dwell} out of range");
        }
    }

    #[test]
    fn test_random_dwell_deterministic() {
        let mut a = RandomDwell::new(42, 1.0, 2.0);
        let mut b = RandomDwell::new(42, 1.0, 2.0);
        for _ in 0..16 {
            assert_eq!(a.next_dwell(), b.next_dwell());
        }
    }

    #[test]
    fn test_random_dwell_degenerate_range() {
        let mut sampler = RandomDwell::new(1, 1.5, 1.5);
        assert_eq!(sampler.next_dwell(), 1.5);
    }
}

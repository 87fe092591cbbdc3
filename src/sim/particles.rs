//! Elimination explosion burst
//!
//! Purely visual. Nothing in here feeds back into gameplay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// A single burst particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Radius
    pub size: f32,
    /// Heading (radians)
    pub angle: f32,
    /// Distance per tick
    pub speed: f32,
    /// 1 at spawn, decreases each tick; doubles as render alpha
    pub life: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.size > 0.0
    }
}

/// Burst tuning taken from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParams {
    pub count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub size_decay: f32,
    pub life_decay: f32,
}

impl From<&Settings> for BurstParams {
    fn from(s: &Settings) -> Self {
        Self {
            count: s.burst_count,
            speed_min: s.particle_speed_min,
            speed_max: s.particle_speed_max,
            size_min: s.particle_size_min,
            size_max: s.particle_size_max,
            size_decay: s.particle_size_decay,
            life_decay: s.particle_life_decay,
        }
    }
}

/// Live particle set
#[derive(Debug, Clone)]
pub struct ExplosionSystem {
    params: BurstParams,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ExplosionSystem {
    pub fn new(params: BurstParams, seed: u64) -> Self {
        Self {
            params,
            particles: Vec::with_capacity(params.count),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the live set with a fresh burst at `origin`
    pub fn spawn_burst(&mut self, origin: Vec2) {
        let p = self.params;
        let (speed_lo, speed_hi) = (p.speed_min.min(p.speed_max), p.speed_max.max(p.speed_min));
        let (size_lo, size_hi) = (p.size_min.min(p.size_max), p.size_max.max(p.size_min));
        self.particles.clear();
        for _ in 0..p.count {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(speed_lo..=speed_hi);
            let size = self.rng.random_range(size_lo..=size_hi);
            self.particles.push(Particle {
                pos: origin,
                size,
                angle,
                speed,
                life: 1.0,
            });
        }
    }

    /// Advance one tick and drop dead particles
    pub fn update(&mut self) {
        if self.particles.is_empty() {
            return;
        }
        let p = self.params;
        for particle in self.particles.iter_mut() {
            particle.pos += Vec2::from_angle(particle.angle) * particle.speed;
            particle.size = (particle.size - p.size_decay).max(0.0);
            particle.life = (particle.life - p.life_decay).max(0.0);
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

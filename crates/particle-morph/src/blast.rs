//! Blast overlay: outward scatter with delayed gravity and a fade
//!
//! The overlay follows the smoothed blast amount (fast onset, faster decay)
//! and keeps its own blast-local clock while active. The clock saturates at
//! `MAX_ELAPSED`, so a held blast settles instead of falling forever, and
//! restarts when a mostly released blast is triggered again. The overlay
//! only ever adds a displacement and scales alpha; identities and base
//! positions are untouched.

use std::f32::consts::TAU;

use glam::Vec3;
use particle_geometry::{hash01, hash_signed};

use particle_geometry::easing::{ease_out_cubic, smoothstep};

/// Below this amount the blast counts as finished
pub const ACTIVE_EPSILON: f32 = 1e-3;

/// Blast clock ceiling in seconds
pub const MAX_ELAPSED: f32 = 2.0;

/// Re-triggering below this amount starts a fresh burst
pub const RETRIGGER_AMOUNT: f32 = 0.5;

/// Seconds for the outward burst to complete
const BURST_DURATION: f32 = 1.2;

/// Scatter speed range (scene units per burst)
const SCATTER_MIN: f32 = 8.0;
const SCATTER_RANGE: f32 = 14.0;

/// Gravity starts after a short delay and ramps in
const GRAVITY: f32 = 9.0;
const GRAVITY_DELAY: f32 = 0.3;
const GRAVITY_RAMP: f32 = 0.5;

const SPIN_RATE: f32 = 6.0;
const WOBBLE: f32 = 0.35;

/// Alpha fades out over this band of blast amount
const FADE_BAND: (f32, f32) = (0.4, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlastPhase {
    Idle,
    Building,
    Releasing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlastEffect {
    amount: f32,
    elapsed: f32,
    phase: BlastPhase,
}

impl BlastEffect {
    pub fn new() -> Self {
        Self {
            amount: 0.0,
            elapsed: 0.0,
            phase: BlastPhase::Idle,
        }
    }

    /// Follow the smoothed blast amount for one frame
    pub fn update(&mut self, amount: f32, dt: f32) {
        let amount = amount.clamp(0.0, 1.0);
        let phase = if amount <= ACTIVE_EPSILON {
            BlastPhase::Idle
        } else if amount >= self.amount {
            BlastPhase::Building
        } else {
            BlastPhase::Releasing
        };

        let retrigger = phase == BlastPhase::Building
            && self.phase == BlastPhase::Releasing
            && self.amount < RETRIGGER_AMOUNT;
        if phase == BlastPhase::Idle || retrigger {
            self.elapsed = 0.0;
        }
        if phase != BlastPhase::Idle {
            self.elapsed = (self.elapsed + dt.max(0.0)).min(MAX_ELAPSED);
        }

        if phase != self.phase && (phase == BlastPhase::Idle || self.phase == BlastPhase::Idle) {
            log::debug!("Blast {:?} -> {:?} (amount {:.3})", self.phase, phase, amount);
        }

        self.amount = amount;
        self.phase = phase;
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Seconds since the blast became active, saturating at `MAX_ELAPSED`
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn phase(&self) -> BlastPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != BlastPhase::Idle
    }

    /// Alpha multiplier
    pub fn alpha(&self) -> f32 {
        blast_alpha(self.amount)
    }

    /// Displacement for one particle, scaled to scene units by `scale`
    pub fn displacement(&self, progress: f32, scale: f32) -> Vec3 {
        scatter_displacement(progress, self.amount, self.elapsed) * scale
    }
}

impl Default for BlastEffect {
    fn default() -> Self {
        Self::new()
    }
}

/// 1 at rest, fading to 0 as the blast amount approaches 1
pub fn blast_alpha(amount: f32) -> f32 {
    1.0 - smoothstep(FADE_BAND.0, FADE_BAND.1, amount)
}

/// Scatter direction for a particle, uniform on the sphere
pub fn scatter_direction(progress: f32) -> Vec3 {
    let azimuth = hash01(progress, 201) * TAU;
    let cos_polar = hash_signed(progress, 202);
    let sin_polar = (1.0 - cos_polar * cos_polar).max(0.0).sqrt();
    Vec3::new(
        sin_polar * azimuth.cos(),
        cos_polar,
        sin_polar * azimuth.sin(),
    )
}

/// Unscaled blast displacement
pub fn scatter_displacement(progress: f32, amount: f32, elapsed: f32) -> Vec3 {
    if amount <= 0.0 {
        return Vec3::ZERO;
    }

    let speed = SCATTER_MIN + SCATTER_RANGE * hash01(progress, 203);
    let burst = scatter_direction(progress) * speed * ease_out_cubic(elapsed / BURST_DURATION);

    let gravity_on = smoothstep(GRAVITY_DELAY, GRAVITY_DELAY + GRAVITY_RAMP, elapsed);
    let fall = Vec3::NEG_Y * 0.5 * GRAVITY * elapsed * elapsed * gravity_on;

    let spin = elapsed * SPIN_RATE + hash01(progress, 204) * TAU;
    let wobble = Vec3::new(spin.sin(), spin.cos(), (0.5 * spin).sin()) * WOBBLE * elapsed.min(1.0);

    (burst + fall + wobble) * amount
}

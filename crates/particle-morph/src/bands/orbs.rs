//! Band 5: seven orbiting orbs with tapering ribbon trails
//!
//! Each orb's share of the band is split into a head (a small sphere that
//! bobs in depth) and a flat ribbon trailing behind it. The hand roll pushes
//! every orb by its own inertia, so the ring shears rather than turning
//! rigidly.

use std::f32::consts::TAU;

use particle_geometry::{hash01, hash_signed, GOLDEN_ANGLE};

use super::{slot, BandInput, BandPoint};
use particle_geometry::easing::lerp_f32;

pub const ORB_COUNT: usize = 7;

/// Fraction of each orb's particles forming the head
pub const HEAD_FRACTION: f32 = 0.15;

/// Virtual sample count spread over each head sphere
const HEAD_SAMPLES: f32 = 180.0;

/// Fixed orbital parameters of one orb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub orbit_radius: f32,
    pub base_angle: f32,
    pub phase: f32,
    pub inertia: f32,
    pub direction: f32,
    pub speed: f32,
}

impl Orb {
    pub fn new(index: usize, k: f32) -> Self {
        let seed = index as f32;
        Self {
            orbit_radius: (0.3 + 0.08 * index as f32) * k,
            base_angle: index as f32 * TAU / ORB_COUNT as f32,
            phase: hash01(seed, 0x0b5) * TAU,
            inertia: 0.4 + 0.8 * hash01(seed, 0x1e7),
            direction: if index % 2 == 0 { 1.0 } else { -1.0 },
            speed: 0.35 + 0.05 * index as f32,
        }
    }

    /// Head angle: steady orbit, roll drive, an oscillating lag and a wobble
    pub fn angle(&self, time: f32, rotation: f32) -> f32 {
        self.base_angle
            + self.direction * self.speed * time
            + rotation * self.inertia
            + 0.25 * (0.6 * time + self.phase).sin()
            + 0.04 * (3.1 * time + 2.0 * self.phase).sin()
    }

    /// Angular length of the trail; faster orbs smear further
    pub fn trail_length(&self) -> f32 {
        0.5 + 1.2 * self.speed
    }

    pub fn bob(&self, time: f32, k: f32) -> f32 {
        0.03 * k * (2.0 * time + self.phase).sin()
    }
}

/// Trail intensity at `w` (0 = head, 1 = tail end)
pub fn trail_intensity(w: f32) -> f32 {
    (1.0 - w).clamp(0.0, 1.0)
}

pub fn sample(input: &BandInput) -> BandPoint {
    let k = input.radius;
    let t = input.time;
    let (index, v) = slot(input.local, ORB_COUNT);
    let orb = Orb::new(index, k);
    let angle = orb.angle(t, input.rotation);
    let bob = orb.bob(t, k);

    if v < HEAD_FRACTION {
        // golden-angle sphere around the head center
        let w = v / HEAD_FRACTION;
        let y = 1.0 - 2.0 * w;
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let theta = w * HEAD_SAMPLES * GOLDEN_ANGLE;
        let size = 0.05 * k;
        let (s, c) = angle.sin_cos();
        BandPoint::from_cartesian(
            orb.orbit_radius * c + size * ring * theta.cos(),
            orb.orbit_radius * s + size * y,
            bob + size * ring * theta.sin(),
        )
        .with_size(1.6)
    } else {
        let w = (v - HEAD_FRACTION) / (1.0 - HEAD_FRACTION);
        let width = 0.06 * k * (1.0 - w);
        let lateral = hash_signed(input.progress, 0x7a1) * 0.5 * width;
        BandPoint::polar(
            orb.orbit_radius + lateral,
            angle - orb.direction * w * orb.trail_length(),
        )
        .with_depth(bob * (1.0 - w))
        .with_intensity(trail_intensity(w))
        .with_size(lerp_f32(1.0, 0.35, w))
    }
}

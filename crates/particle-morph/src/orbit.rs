//! Orbit pose: the animated open-hand structure
//!
//! Each sub-structure animates its fixed base position, then all of them
//! share a breathing pulse and a pinch-driven size factor.

use glam::{Quat, Vec3};
use particle_geometry::{ParticleIdentity, StructureTag, ICOSAHEDRON_END};

use particle_geometry::easing::{lerp_f32, smoothstep};

/// Angular rates (rad/s) of the icosahedron about Y and X
const ICOSAHEDRON_SPIN: (f32, f32) = (0.21, 0.13);

/// Width of one ring sub-band in progress units
const RING_BAND_WIDTH: f32 = 0.1;

/// Per-ring rotation axis, direction and speed
///
/// One entry per great circle (XY, XZ, YZ). Each axis lies in its ring's
/// plane so the ring tumbles instead of spinning in place.
const RING_MOTION: [(Vec3, f32, f32); 3] = [
    (Vec3::X, 1.0, 0.30),
    (Vec3::Z, -1.0, 0.45),
    (Vec3::Z, 1.0, 0.60),
];

const SPIRAL_TWIST: f32 = 0.25;

const SHIMMER_AMPLITUDE: f32 = 0.04;

/// Breathing pulse 1 + 0.03·sin(1.5t)
const BREATH_AMPLITUDE: f32 = 0.03;
const BREATH_RATE: f32 = 1.5;

/// Pinch band over which the orbit shrinks towards its floor
const SHRINK_BAND: (f32, f32) = (0.6, 1.0);
const SHRINK_FLOOR: f32 = 0.3;

/// Ring sub-band index for a ring particle
pub fn ring_index(progress: f32) -> usize {
    (((progress - ICOSAHEDRON_END) / RING_BAND_WIDTH).floor().max(0.0) as usize)
        .min(RING_MOTION.len() - 1)
}

/// Overall size factor: full size when pinched, shrinking to the floor when fully open
pub fn orbit_size_factor(pinch: f32) -> f32 {
    lerp_f32(1.0, SHRINK_FLOOR, smoothstep(SHRINK_BAND.0, SHRINK_BAND.1, pinch)).max(SHRINK_FLOOR)
}

pub fn breathing(time: f32) -> f32 {
    1.0 + BREATH_AMPLITUDE * (BREATH_RATE * time).sin()
}

/// Orbit-pose position of a particle at `time`
pub fn orbit_position(identity: &ParticleIdentity, time: f32, pinch: f32) -> Vec3 {
    let base = identity.base();
    let animated = match identity.tag() {
        StructureTag::Icosahedron => {
            let spin = Quat::from_rotation_y(time * ICOSAHEDRON_SPIN.0)
                * Quat::from_rotation_x(time * ICOSAHEDRON_SPIN.1);
            spin * base
        }
        StructureTag::Rings => {
            let (axis, direction, speed) = RING_MOTION[ring_index(identity.progress)];
            Quat::from_axis_angle(axis, direction * speed * time) * base
        }
        StructureTag::Spiral => Quat::from_rotation_y(time * SPIRAL_TWIST) * base,
        StructureTag::Floating => {
            let phase = identity.progress * 50.0;
            base * (1.0 + SHIMMER_AMPLITUDE * (time * 2.0 + phase).sin())
        }
    };
    animated * breathing(time) * orbit_size_factor(pinch)
}

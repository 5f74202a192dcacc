//! Interpolation and easing helpers shared by the morph and gesture stages

use glam::Vec3;

/// Hermite smoothstep between two edges
///
/// Edges may be given in descending order, which inverts the ramp.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Ease out (cubic) - fast start, decelerating
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Weighted mix of two points
///
/// Written as `a·(1−t) + b·t` so that `t = 1` returns `b` bit-exactly.
pub fn mix_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Fractional part in [0, 1)
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

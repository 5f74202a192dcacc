//! Crossover between the orbit pose and the mandala pose

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use particle_geometry::hash_signed;

use particle_geometry::easing::{mix_vec3, smoothstep};

/// Eased transition parameter
pub fn eased_transition(magic: f32) -> f32 {
    smoothstep(0.0, 1.0, magic)
}

/// Per-particle jitter that peaks mid-transition and vanishes at both ends
///
/// Hides the discontinuities between band formulas while particles cross over.
pub fn crossover_noise(progress: f32, magic: f32, amplitude: f32) -> Vec3 {
    // sin(π) is slightly negative in f32; clamp so the end state is exact
    let envelope = (PI * magic.clamp(0.0, 1.0)).sin().max(0.0) * amplitude;
    if envelope <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        hash_signed(progress, 101),
        hash_signed(progress, 102),
        hash_signed(progress, 103),
    ) * envelope
}

/// Blend an orbit-pose position into a mandala-pose position
///
/// The orbit pose is turned by up to 180° about Y as it fades out, so
/// the two poses don't pop when they swap dominance.
pub fn blend_positions(
    orbit: Vec3,
    mandala: Vec3,
    progress: f32,
    magic: f32,
    noise_amplitude: f32,
) -> Vec3 {
    let eased = eased_transition(magic);
    let turned = Quat::from_rotation_y(eased * PI) * orbit;
    mix_vec3(turned, mandala, eased) + crossover_noise(progress, magic, noise_amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORBIT: Vec3 = Vec3::new(3.0, -1.5, 7.25);
    const MANDALA: Vec3 = Vec3::new(-2.0, 4.5, 0.125);

    #[test]
    fn test_start_is_orbit() {
        assert_eq!(blend_positions(ORBIT, MANDALA, 0.37, 0.0, 1.0), ORBIT);
    }

    #[test]
    fn test_end_is_mandala_exactly() {
        assert_eq!(blend_positions(ORBIT, MANDALA, 0.37, 1.0, 1.0), MANDALA);
    }

    #[test]
    fn test_noise_peaks_mid_transition() {
        let quarter = crossover_noise(0.37, 0.25, 1.0).length();
        let mid = crossover_noise(0.37, 0.5, 1.0).length();
        assert!(mid > quarter);
        assert_eq!(crossover_noise(0.37, 0.0, 1.0), Vec3::ZERO);
        assert_eq!(crossover_noise(0.37, 1.0, 1.0), Vec3::ZERO);
    }

    #[test]
    fn test_noise_is_per_particle() {
        assert_ne!(crossover_noise(0.1, 0.5, 1.0), crossover_noise(0.2, 0.5, 1.0));
    }

    #[test]
    fn test_orbit_half_turn_at_end_of_rotation() {
        // without the mandala contribution the orbit pose is flipped about Y
        let turned = Quat::from_rotation_y(eased_transition(1.0) * PI) * ORBIT;
        assert!((turned - Vec3::new(-3.0, -1.5, -7.25)).length() < 1e-4);
    }
}

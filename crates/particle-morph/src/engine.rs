//! Per-frame morph of every particle into render attributes

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use particle_geometry::ParticleIdentity;

use crate::bands::{mandala_point, BandKind, BandPoint};
use crate::blast::BlastEffect;
use crate::blend::{blend_positions, eased_transition};
use crate::color::{palette, transition_flash};
use particle_geometry::easing::lerp_f32;
use crate::orbit::orbit_position;
use crate::params::{ControlSignals, FrameInput, MorphParams};

/// Radius below which a non-hex band point is hidden
const DEGENERATE_RADIUS: f32 = 0.1;

/// GPU-compatible render record, one per particle
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    /// World-space position
    pub position: [f32; 3],
    /// Point size after perspective attenuation
    pub size: f32,
    /// Linear RGB
    pub color: [f32; 3],
    pub alpha: f32,
}

/// Intermediate values for one particle, exposed for inspection and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphSample {
    pub orbit: Vec3,
    pub band: BandKind,
    pub point: BandPoint,
    /// Blended position before the blast overlay
    pub position: Vec3,
}

/// Orbit pose, mandala pose and their blend for one particle
pub fn morph_sample(
    identity: &ParticleIdentity,
    time: f32,
    signals: &ControlSignals,
    params: &MorphParams,
) -> MorphSample {
    let orbit = orbit_position(identity, time, signals.pinch);
    let (band, point) = mandala_point(
        identity.progress,
        time,
        signals.magic,
        signals.rotation,
        params.scale,
    );
    let position = blend_positions(
        orbit,
        point.position(),
        identity.progress,
        signals.magic,
        params.noise_amplitude * params.scale,
    );
    MorphSample {
        orbit,
        band,
        point,
        position,
    }
}

/// Band size multiplier including the degenerate-radius guard
pub fn band_size(band: BandKind, point: &BandPoint, scale: f32) -> f32 {
    if band != BandKind::Hex && point.radius < DEGENERATE_RADIUS * scale {
        0.0
    } else {
        band.size_multiplier() * point.size
    }
}

/// Full render attributes for one particle
pub fn morph_particle(
    identity: &ParticleIdentity,
    frame: &FrameInput,
    params: &MorphParams,
    blast: &BlastEffect,
) -> ParticleVertex {
    let signals = &frame.signals;
    let sample = morph_sample(identity, frame.time, signals, params);
    let eased = eased_transition(signals.magic);

    let position = sample.position + blast.displacement(identity.progress, params.scale);

    let depth = (params.camera_distance - position.z).max(params.near_depth);
    let perspective = params.camera_distance / depth;
    let band_multiplier = band_size(sample.band, &sample.point, params.scale);
    let size_multiplier = lerp_f32(1.0, band_multiplier, eased);
    let size = params.base_size * perspective * size_multiplier;

    let magic = signals.magic.clamp(0.0, 1.0);
    let color = params
        .base_color
        .lerp(sample.band.color(), magic)
        .lerp(palette::WHITE, params.flash_strength * transition_flash(magic))
        .clamped();

    let visibility = lerp_f32(params.hidden_alpha, 1.0, signals.visible.clamp(0.0, 1.0));
    let intensity = lerp_f32(1.0, sample.point.intensity, eased);
    let alpha = (visibility * intensity * blast.alpha()).clamp(0.0, 1.0);

    ParticleVertex {
        position: position.to_array(),
        size,
        color: color.to_array(),
        alpha,
    }
}

/// Owns the particle population and the per-frame render buffer
pub struct MorphEngine {
    identities: Vec<ParticleIdentity>,
    params: MorphParams,
    blast: BlastEffect,
    vertices: Vec<ParticleVertex>,
    frame_counter: u64,
}

impl MorphEngine {
    pub fn new(identities: Vec<ParticleIdentity>, params: MorphParams) -> Self {
        log::info!(
            "MorphEngine ready: {} particles, scale {:.2}",
            identities.len(),
            params.scale
        );
        let vertices = vec![ParticleVertex::default(); identities.len()];
        Self {
            identities,
            params,
            blast: BlastEffect::new(),
            vertices,
            frame_counter: 0,
        }
    }

    /// Advance one frame and return the render buffer
    pub fn update(&mut self, frame: &FrameInput) -> &[ParticleVertex] {
        self.blast.update(frame.signals.blast, frame.dt);

        let params = &self.params;
        let blast = &self.blast;
        for (vertex, identity) in self.vertices.iter_mut().zip(self.identities.iter()) {
            *vertex = morph_particle(identity, frame, params, blast);
        }

        self.frame_counter += 1;
        if self.frame_counter % 600 == 0 {
            log::debug!(
                "frame {}: t={:.2}s magic={:.3} blast={:.3}",
                self.frame_counter,
                frame.time,
                frame.signals.magic,
                self.blast.amount()
            );
        }

        &self.vertices
    }

    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    pub fn identities(&self) -> &[ParticleIdentity] {
        &self.identities
    }

    pub fn params(&self) -> &MorphParams {
        &self.params
    }

    pub fn blast(&self) -> &BlastEffect {
        &self.blast
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    pub fn particle_count(&self) -> usize {
        self.identities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_geometry::{GeometryConfig, GeometryGenerator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn identities(n: usize) -> Vec<ParticleIdentity> {
        let config = GeometryConfig::new(n, 1.0).unwrap();
        GeometryGenerator::new(config).generate_with_rng(&mut StdRng::seed_from_u64(3))
    }

    fn frame(time: f32, magic: f32) -> FrameInput {
        FrameInput {
            time,
            dt: 1.0 / 60.0,
            signals: ControlSignals {
                visible: 1.0,
                pinch: 0.5,
                magic,
                rotation: 0.2,
                blast: 0.0,
            },
        }
    }

    #[test]
    fn test_open_pose_is_orbit() {
        let params = MorphParams::default();
        let mut engine = MorphEngine::new(identities(1200), params);
        let f = frame(2.5, 0.0);
        let out = engine.update(&f).to_vec();
        for (v, id) in out.iter().zip(engine.identities()) {
            let expected = orbit_position(id, 2.5, 0.5);
            assert!((Vec3::from_array(v.position) - expected).length() < 1e-5);
        }
    }

    #[test]
    fn test_closed_pose_is_mandala() {
        let params = MorphParams::default();
        let mut engine = MorphEngine::new(identities(1200), params);
        let f = frame(2.5, 1.0);
        let out = engine.update(&f).to_vec();
        for (v, id) in out.iter().zip(engine.identities()) {
            let (_, point) = mandala_point(id.progress, 2.5, 1.0, 0.2, 1.0);
            assert_eq!(Vec3::from_array(v.position), point.position());
        }
    }

    #[test]
    fn test_open_pose_uses_uniform_size_and_base_color() {
        let params = MorphParams::default();
        let id = ParticleIdentity::new(Vec3::ZERO, 0.6);
        let v = morph_particle(&id, &frame(0.0, 0.0), &params, &BlastEffect::new());
        assert!((v.size - params.base_size).abs() < 1e-5);
        assert_eq!(v.color, params.base_color.to_array());
        assert!((v.alpha - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_closed_pose_uses_band_color() {
        let params = MorphParams::default();
        let id = ParticleIdentity::new(Vec3::ZERO, 0.55);
        let v = morph_particle(&id, &frame(0.0, 1.0), &params, &BlastEffect::new());
        let expected = BandKind::Sacred.color().clamped().to_array();
        for (got, want) in v.color.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_radius_hides_point() {
        let tiny = BandPoint::polar(0.05, 0.0);
        assert_eq!(band_size(BandKind::Spiral, &tiny, 1.0), 0.0);
        assert!(band_size(BandKind::Hex, &tiny, 1.0) > 0.0);
    }

    #[test]
    fn test_perspective_attenuation() {
        let params = MorphParams::default();
        let near = ParticleIdentity::new(Vec3::new(0.0, 0.0, 10.0), 0.3);
        let far = ParticleIdentity::new(Vec3::new(0.0, 0.0, -10.0), 0.3);
        let blast = BlastEffect::new();
        let a = morph_particle(&near, &frame(0.0, 0.0), &params, &blast);
        let b = morph_particle(&far, &frame(0.0, 0.0), &params, &blast);
        assert!(a.size > b.size);
    }

    #[test]
    fn test_hidden_hand_dims_but_keeps_rendering() {
        let params = MorphParams::default();
        let id = ParticleIdentity::new(Vec3::X, 0.1);
        let mut f = frame(0.0, 0.0);
        f.signals.visible = 0.0;
        let v = morph_particle(&id, &f, &params, &BlastEffect::new());
        assert!((v.alpha - params.hidden_alpha).abs() < 1e-6);
    }

    #[test]
    fn test_blast_scatters_and_fades() {
        let params = MorphParams::default();
        let mut engine = MorphEngine::new(identities(600), params);
        let calm = engine.update(&frame(1.0, 0.0)).to_vec();

        let mut f = frame(1.0, 0.0);
        f.signals.blast = 1.0;
        for _ in 0..30 {
            engine.update(&f);
        }
        let blasted = engine.vertices();
        assert!(engine.blast().is_active());
        let moved = calm
            .iter()
            .zip(blasted)
            .filter(|(a, b)| {
                (Vec3::from_array(a.position) - Vec3::from_array(b.position)).length() > 1.0
            })
            .count();
        assert!(moved > 500);
        assert!(blasted.iter().all(|v| v.alpha == 0.0));
    }

    #[test]
    fn test_vertex_is_pod() {
        let v = ParticleVertex::default();
        assert_eq!(bytemuck::bytes_of(&v).len(), 32);
    }
}

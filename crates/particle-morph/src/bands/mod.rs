//! Mandala pose: six sacred-geometry bands
//!
//! A particle's progress selects one of six equal-width bands once, via
//! [`BandKind::from_progress`]; each band is a pure generator returning polar
//! coordinates `(r, θ, z)` plus a size multiplier and an intensity.
//!
//! Several generators use the rounded-polygon radius `k / cos(...)`. Its
//! argument is wrapped into one sector so the cosine stays positive; the
//! radius itself is never clamped, so corners are as sharp as the secant
//! makes them.

pub mod flower;
pub mod hex;
pub mod interlocking;
pub mod orbs;
pub mod sacred;
pub mod spiral;

use std::f32::consts::TAU;

use glam::Vec3;

use crate::color::{palette, Color};
use particle_geometry::easing::{fract, smoothstep};

/// Mandala radius in scene units before scaling
pub const MANDALA_RADIUS: f32 = 12.0;

/// Number of bands
pub const BAND_COUNT: usize = 6;

/// Band selected by a particle's progress
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandKind {
    Hex = 0,
    Flower = 1,
    Interlocking = 2,
    Sacred = 3,
    Spiral = 4,
    Orbs = 5,
}

impl BandKind {
    pub const ALL: [BandKind; BAND_COUNT] = [
        BandKind::Hex,
        BandKind::Flower,
        BandKind::Interlocking,
        BandKind::Sacred,
        BandKind::Spiral,
        BandKind::Orbs,
    ];

    pub fn from_progress(progress: f32) -> Self {
        let index = (progress * BAND_COUNT as f32).floor().clamp(0.0, (BAND_COUNT - 1) as f32);
        Self::ALL[index as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Position of `progress` inside this band, in [0, 1)
    pub fn local(self, progress: f32) -> f32 {
        (progress * BAND_COUNT as f32 - self.index() as f32).clamp(0.0, 0.999_999)
    }

    /// Band-wide point size multiplier
    pub fn size_multiplier(self) -> f32 {
        match self {
            BandKind::Hex => 1.2,
            BandKind::Flower => 1.0,
            BandKind::Interlocking => 1.1,
            BandKind::Sacred => 0.9,
            BandKind::Spiral => 1.0,
            BandKind::Orbs => 1.3,
        }
    }

    /// Palette color tag
    pub fn color(self) -> Color {
        palette::BANDS[self.index()]
    }
}

/// Inputs shared by every band generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandInput {
    pub progress: f32,
    /// Position inside the band, in [0, 1)
    pub local: f32,
    pub time: f32,
    /// Raw transition amount, used for depth offsets
    pub magic: f32,
    /// Smoothed hand roll
    pub rotation: f32,
    /// Mandala unit radius (already scaled)
    pub radius: f32,
}

/// Generator output in polar form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub radius: f32,
    pub angle: f32,
    pub depth: f32,
    /// Per-point size multiplier on top of the band multiplier
    pub size: f32,
    /// Brightness in [0, 1]
    pub intensity: f32,
}

impl BandPoint {
    pub fn polar(radius: f32, angle: f32) -> Self {
        Self {
            radius,
            angle,
            depth: 0.0,
            size: 1.0,
            intensity: 1.0,
        }
    }

    pub fn from_cartesian(x: f32, y: f32, depth: f32) -> Self {
        Self {
            depth,
            ..Self::polar((x * x + y * y).sqrt(), y.atan2(x))
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Mandala lies in the XY plane facing the camera
    pub fn position(&self) -> Vec3 {
        let (s, c) = self.angle.sin_cos();
        Vec3::new(self.radius * c, self.radius * s, self.depth)
    }
}

/// Run the generator for `kind`
pub fn sample_band(kind: BandKind, input: &BandInput) -> BandPoint {
    match kind {
        BandKind::Hex => hex::sample(input),
        BandKind::Flower => flower::sample(input),
        BandKind::Interlocking => interlocking::sample(input),
        BandKind::Sacred => sacred::sample(input),
        BandKind::Spiral => spiral::sample(input),
        BandKind::Orbs => orbs::sample(input),
    }
}

/// Mandala-pose band and point for a particle
pub fn mandala_point(
    progress: f32,
    time: f32,
    magic: f32,
    rotation: f32,
    scale: f32,
) -> (BandKind, BandPoint) {
    let kind = BandKind::from_progress(progress);
    let input = BandInput {
        progress,
        local: kind.local(progress),
        time,
        magic,
        rotation,
        radius: MANDALA_RADIUS * scale,
    };
    (kind, sample_band(kind, &input))
}

/// Rounded regular polygon radius at `angle`: `k / cos(mod(angle + h, 2h) − h)`
/// with `h = π / sides`. `k` is the apothem.
pub fn polygon_radius(angle: f32, apothem: f32, sides: u32) -> f32 {
    let half = std::f32::consts::PI / sides as f32;
    apothem / ((angle + half).rem_euclid(2.0 * half) - half).cos()
}

/// 1 at a polygon vertex, falling to 0 a short arc away
pub fn vertex_weight(angle: f32, sides: u32) -> f32 {
    let sector = TAU / sides as f32;
    let m = (angle + sector * 0.5).rem_euclid(sector);
    let to_vertex = m.min(sector - m);
    1.0 - smoothstep(0.0, 0.06, to_vertex)
}

/// Split `local` into sub-layers ending at `ends` (ascending, last = 1)
///
/// Returns the layer index and the position inside that layer in [0, 1).
pub fn sub_layer(local: f32, ends: &[f32]) -> (usize, f32) {
    let mut start = 0.0;
    for (i, &end) in ends.iter().enumerate() {
        if local < end || i == ends.len() - 1 {
            let u = ((local - start) / (end - start)).clamp(0.0, 0.999_999);
            return (i, u);
        }
        start = end;
    }
    (0, local)
}

/// Split `u` into `count` equal slots: (slot, position in slot)
pub fn slot(u: f32, count: usize) -> (usize, f32) {
    let scaled = u * count as f32;
    ((scaled.floor() as usize).min(count - 1), fract(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ranges() {
        assert_eq!(BandKind::from_progress(0.0), BandKind::Hex);
        assert_eq!(BandKind::from_progress(0.17), BandKind::Flower);
        assert_eq!(BandKind::from_progress(0.5), BandKind::Sacred);
        assert_eq!(BandKind::from_progress(0.9999), BandKind::Orbs);
    }

    #[test]
    fn test_bands_equal_width() {
        let n = 60_000;
        let mut counts = [0usize; BAND_COUNT];
        for i in 0..n {
            counts[BandKind::from_progress(i as f32 / n as f32).index()] += 1;
        }
        for c in counts {
            assert!((c as i64 - 10_000).abs() <= 1, "{counts:?}");
        }
    }

    #[test]
    fn test_local_range() {
        for i in 0..1000 {
            let p = i as f32 / 1000.0;
            let kind = BandKind::from_progress(p);
            let local = kind.local(p);
            assert!((0.0..1.0).contains(&local));
        }
    }

    #[test]
    fn test_polygon_radius_bounds() {
        // hexagon: apothem at edge midpoints, circumradius at vertices
        let k = 2.0;
        for i in 0..720 {
            let a = i as f32 / 720.0 * TAU;
            let r = polygon_radius(a, k, 6);
            assert!(r >= k - 1e-4);
            assert!(r <= k / (std::f32::consts::PI / 6.0).cos() + 1e-3);
        }
        assert!((polygon_radius(0.0, k, 6) - k).abs() < 1e-5);
    }

    #[test]
    fn test_vertex_weight_peaks_at_vertices() {
        let vertex = std::f32::consts::PI / 6.0;
        assert!(vertex_weight(vertex, 6) > 0.99);
        assert_eq!(vertex_weight(0.0, 6), 0.0);
    }

    #[test]
    fn test_sub_layer() {
        let ends = [0.3, 0.6, 1.0];
        assert_eq!(sub_layer(0.0, &ends).0, 0);
        let (layer, u) = sub_layer(0.45, &ends);
        assert_eq!(layer, 1);
        assert!((u - 0.5).abs() < 1e-5);
        assert_eq!(sub_layer(0.99, &ends).0, 2);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let p = BandPoint::from_cartesian(3.0, -4.0, 0.5);
        assert!((p.radius - 5.0).abs() < 1e-5);
        let pos = p.position();
        assert!((pos - Vec3::new(3.0, -4.0, 0.5)).length() < 1e-4);
    }

    #[test]
    fn test_every_band_produces_finite_points() {
        for i in 0..6000 {
            let progress = i as f32 / 6000.0;
            for time in [0.0, 1.7, 42.0] {
                let (_, point) = mandala_point(progress, time, 0.7, 0.4, 1.0);
                assert!(point.radius.is_finite() && point.angle.is_finite());
                assert!(point.depth.is_finite());
                assert!((0.0..=1.0).contains(&point.intensity));
                assert!(point.size >= 0.0);
            }
        }
    }

    #[test]
    fn test_mandala_is_deterministic() {
        let a = mandala_point(0.734, 3.2, 0.5, 0.1, 1.0);
        let b = mandala_point(0.734, 3.2, 0.5, 0.1, 1.0);
        assert_eq!(a, b);
    }
}

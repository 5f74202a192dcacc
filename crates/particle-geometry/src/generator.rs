//! Builds the static particle population
//!
//! Particles are generated in progress order: icosahedron edges, three great
//! circles, a pole-to-pole spiral, then a golden-angle shell. `progress` is
//! `index / N`, so the sub-structure ranges follow directly from
//! [`StructureTag::from_progress`].

use std::f32::consts::{PI, TAU};
use std::ops::Range;

use glam::Vec3;
use rand::Rng;

use crate::config::GeometryConfig;
use crate::constants::*;
use crate::particle::{ParticleIdentity, StructureTag};

/// Generates particle identities for a validated configuration
pub struct GeometryGenerator {
    config: GeometryConfig,
}

impl GeometryGenerator {
    pub fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Generate using the thread RNG for shell jitter
    pub fn generate(&self) -> Vec<ParticleIdentity> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Generate with a caller-supplied RNG (reproducible with a seeded RNG)
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Vec<ParticleIdentity> {
        let n = self.config.particle_count();
        let scale = self.config.scale();
        let ranges = structure_ranges(n);
        let vertices = icosahedron_vertices();
        let edges = icosahedron_edges();
        let mut particles = Vec::with_capacity(n);

        for (tag, range) in StructureTag::ALL.iter().zip(ranges.iter()) {
            let count = range.len();
            for (local, index) in range.clone().enumerate() {
                let position = match tag {
                    StructureTag::Icosahedron => {
                        icosahedron_point(&vertices, &edges, local, count)
                    }
                    StructureTag::Rings => great_circle_point(local, count),
                    StructureTag::Spiral => spiral_point(local, count),
                    StructureTag::Floating => {
                        let jitter = 1.0 + rng.random_range(-SHELL_JITTER..SHELL_JITTER);
                        shell_point(local, count) * jitter
                    }
                };
                particles.push(ParticleIdentity::new(position * scale, progress_of(index, n)));
            }
        }

        log::info!(
            "Generated {} particles (icosahedron {}, rings {}, spiral {}, floating {})",
            n,
            ranges[0].len(),
            ranges[1].len(),
            ranges[2].len(),
            ranges[3].len()
        );

        particles
    }
}

/// Progress of the particle at `index` in a population of `n`
pub fn progress_of(index: usize, n: usize) -> f32 {
    index as f32 / n as f32
}

/// Index ranges of the four sub-structures, in `StructureTag::ALL` order
pub fn structure_ranges(n: usize) -> [Range<usize>; 4] {
    // first index whose progress is at or past each threshold
    let boundary = |threshold: f32| (0..n).find(|&i| progress_of(i, n) >= threshold).unwrap_or(n);
    let a = boundary(ICOSAHEDRON_END);
    let b = boundary(RINGS_END);
    let c = boundary(SPIRAL_END);
    [0..a, a..b, b..c, c..n]
}

/// Normalized icosahedron vertices
pub fn icosahedron_vertices() -> [Vec3; 12] {
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    [
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

/// The 30 edges as vertex index pairs
///
/// Edges join vertex pairs at the minimum vertex distance.
pub fn icosahedron_edges() -> Vec<(usize, usize)> {
    let vertices = icosahedron_vertices();
    let edge_length = vertices[0].distance(vertices[1]);
    let mut edges = Vec::with_capacity(30);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (vertices[i].distance(vertices[j]) - edge_length).abs() < 1e-3 {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn icosahedron_point(vertices: &[Vec3], edges: &[(usize, usize)], local: usize, count: usize) -> Vec3 {
    let edge = edges[local % edges.len()];
    let steps = count.div_ceil(edges.len()).max(2);
    let t = (local / edges.len()) as f32 / (steps - 1) as f32;
    vertices[edge.0].lerp(vertices[edge.1], t) * ICOSAHEDRON_RADIUS
}

fn great_circle_point(local: usize, count: usize) -> Vec3 {
    let per_circle = count.div_ceil(3).max(1);
    let circle = local / per_circle;
    let angle = (local % per_circle) as f32 / per_circle as f32 * TAU;
    let (s, c) = angle.sin_cos();
    let unit = match circle {
        0 => Vec3::new(c, s, 0.0),
        1 => Vec3::new(c, 0.0, s),
        _ => Vec3::new(0.0, c, s),
    };
    unit * RING_RADIUS
}

fn spiral_point(local: usize, count: usize) -> Vec3 {
    let t = local as f32 / count.max(1) as f32;
    let polar = t * PI;
    let azimuth = t * SPIRAL_TURNS * TAU;
    Vec3::new(
        polar.sin() * azimuth.cos(),
        polar.cos(),
        polar.sin() * azimuth.sin(),
    ) * SPIRAL_RADIUS
}

fn shell_point(local: usize, count: usize) -> Vec3 {
    let y = 1.0 - 2.0 * (local as f32 + 0.5) / count.max(1) as f32;
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = local as f32 * GOLDEN_ANGLE;
    Vec3::new(ring * theta.cos(), y, ring * theta.sin()) * SHELL_RADIUS
}

//! Layout constants for the generated particle structures
//!
//! Radii are in scene units before the configured scale factor is applied.

/// Default particle population
pub const DEFAULT_PARTICLE_COUNT: usize = 40_000;

/// Default overall scale factor
pub const DEFAULT_SCALE: f32 = 1.0;

/// Progress thresholds separating the four orbit sub-structures
/// (icosahedron < 0.2 <= rings < 0.5 <= spiral < 0.8 <= floating)
pub const ICOSAHEDRON_END: f32 = 0.2;
pub const RINGS_END: f32 = 0.5;
pub const SPIRAL_END: f32 = 0.8;

/// Icosahedron circumradius
pub const ICOSAHEDRON_RADIUS: f32 = 5.5;

/// Radius of the three great circles
pub const RING_RADIUS: f32 = 8.0;

/// Radius of the pole-to-pole spiral
pub const SPIRAL_RADIUS: f32 = 10.0;

/// Number of revolutions the spiral makes between the poles
pub const SPIRAL_TURNS: f32 = 12.0;

/// Radius of the golden-angle shell
pub const SHELL_RADIUS: f32 = 11.5;

/// Relative radius jitter of the shell (+/-)
pub const SHELL_JITTER: f32 = 0.05;

/// Golden angle in radians, pi * (3 - sqrt(5))
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

//! # Particle Geometry
//!
//! Static particle population for the morphing point cloud: fixed identities
//! partitioned across the four orbit sub-structures (icosahedron, great
//! circles, spiral, golden-angle shell), plus the seeded hash used for
//! per-particle randomness. The easing helpers live here so the morph and
//! gesture crates share one definition.

pub mod config;
pub mod constants;
pub mod easing;
pub mod generator;
pub mod hash;
pub mod particle;

pub use config::*;
pub use constants::*;
pub use easing::*;
pub use generator::*;
pub use hash::*;
pub use particle::*;

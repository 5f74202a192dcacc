//! # Particle Morph
//!
//! Per-frame placement of the particle cloud: an animated orbit pose, a
//! six-band 2D mandala pose, the crossover between them, and the blast
//! overlay. Produces one render vertex per particle.

pub mod bands;
pub mod blast;
pub mod blend;
pub mod color;
pub mod engine;
pub mod orbit;
pub mod params;

pub use bands::*;
pub use blast::*;
pub use blend::*;
pub use color::*;
pub use engine::*;
pub use orbit::*;
pub use params::*;

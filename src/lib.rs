//! # Gesture Particles
//!
//! A point cloud that morphs between an orbiting 3D sculpture and a flat
//! six-band mandala, steered by hand gestures.
//!
//! The workspace crates do the work: `particle_geometry` builds the static
//! population, `hand_gesture` turns landmarks into smoothed scalars, and
//! `particle_morph` places every particle each frame. This crate wires them
//! into a [`Pipeline`] driven from a JSON [`SceneConfig`].

pub mod config;
pub mod pipeline;
pub mod script;

pub use config::*;
pub use pipeline::*;
pub use script::*;

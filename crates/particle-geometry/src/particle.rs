//! Particle identities: the fixed per-particle data both structures are derived from

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::{ICOSAHEDRON_END, RINGS_END, SPIRAL_END};

/// Orbit sub-structure a particle belongs to
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureTag {
    Icosahedron = 0,
    Rings = 1,
    Spiral = 2,
    Floating = 3,
}

impl StructureTag {
    pub const ALL: [StructureTag; 4] = [
        StructureTag::Icosahedron,
        StructureTag::Rings,
        StructureTag::Spiral,
        StructureTag::Floating,
    ];

    /// Sub-structure membership is a pure function of progress
    pub fn from_progress(progress: f32) -> Self {
        if progress < ICOSAHEDRON_END {
            StructureTag::Icosahedron
        } else if progress < RINGS_END {
            StructureTag::Rings
        } else if progress < SPIRAL_END {
            StructureTag::Spiral
        } else {
            StructureTag::Floating
        }
    }

    /// Configured share of the population
    pub fn fraction(self) -> f32 {
        match self {
            StructureTag::Icosahedron => ICOSAHEDRON_END,
            StructureTag::Rings => RINGS_END - ICOSAHEDRON_END,
            StructureTag::Spiral => SPIRAL_END - RINGS_END,
            StructureTag::Floating => 1.0 - SPIRAL_END,
        }
    }
}

/// GPU-compatible particle identity
///
/// Created once by the generator and never mutated afterwards.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleIdentity {
    /// Fixed orbit-pose position (already scaled)
    pub base_position: [f32; 3],
    /// Location of the particle along both structures, in [0, 1)
    pub progress: f32,
    /// Sub-structure (as u32, maps to StructureTag)
    pub structure: u32,
}

impl ParticleIdentity {
    pub fn new(base_position: Vec3, progress: f32) -> Self {
        Self {
            base_position: base_position.to_array(),
            progress,
            structure: StructureTag::from_progress(progress) as u32,
        }
    }

    pub fn base(&self) -> Vec3 {
        Vec3::from_array(self.base_position)
    }

    /// Get structure tag
    pub fn tag(&self) -> StructureTag {
        match self.structure {
            0 => StructureTag::Icosahedron,
            1 => StructureTag::Rings,
            2 => StructureTag::Spiral,
            _ => StructureTag::Floating,
        }
    }
}

//! Generator configuration and its validation errors

use std::fmt;

use crate::constants::{DEFAULT_PARTICLE_COUNT, DEFAULT_SCALE};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Particle count must be positive
    InvalidParticleCount(usize),
    /// Scale must be finite and positive
    InvalidScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParticleCount(n) => {
                write!(f, "particle count must be positive, got {n}")
            }
            ConfigError::InvalidScale(s) => {
                write!(f, "scale must be a finite positive number, got {s}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated geometry configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    particle_count: usize,
    scale: f32,
}

impl GeometryConfig {
    pub fn new(particle_count: usize, scale: f32) -> Result<Self, ConfigError> {
        if particle_count == 0 {
            return Err(ConfigError::InvalidParticleCount(particle_count));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::InvalidScale(scale));
        }
        Ok(Self {
            particle_count,
            scale,
        })
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            scale: DEFAULT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_particles() {
        assert_eq!(
            GeometryConfig::new(0, 1.0),
            Err(ConfigError::InvalidParticleCount(0))
        );
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(matches!(
            GeometryConfig::new(10, -1.0),
            Err(ConfigError::InvalidScale(_))
        ));
        assert!(GeometryConfig::new(10, 0.0).is_err());
        assert!(GeometryConfig::new(10, f32::NAN).is_err());
    }

    #[test]
    fn test_accepts_valid() {
        let config = GeometryConfig::new(1234, 2.5).unwrap();
        assert_eq!(config.particle_count(), 1234);
        assert_eq!(config.scale(), 2.5);
    }
}

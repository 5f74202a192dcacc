//! Scene configuration, loadable from JSON

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;
use hand_gesture::SmoothingRates;
use particle_geometry::{ConfigError, GeometryConfig, DEFAULT_PARTICLE_COUNT, DEFAULT_SCALE};
use particle_morph::{Color, MorphParams};
use serde::{Deserialize, Serialize};

/// Lissajous coefficients for companion decorative effects
///
/// Carried through the scene so effects layered on top of the cloud share
/// one set of tuning; the morph itself never reads them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    pub freq_x: f32,
    pub freq_y: f32,
    pub phase: f32,
    pub amplitude: f32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 2.0,
            phase: std::f32::consts::FRAC_PI_2,
            amplitude: 1.0,
        }
    }
}

impl CurveParams {
    pub fn point(&self, t: f32) -> Vec2 {
        Vec2::new(
            (self.freq_x * t + self.phase).sin(),
            (self.freq_y * t).sin(),
        ) * self.amplitude
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub scale: f32,
    /// Opaque sRGB
    pub base_color: [u8; 3],
    pub curve: CurveParams,
    pub smoothing: SmoothingRates,
    /// Fixed seed for the jittered shell; random when absent
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            scale: DEFAULT_SCALE,
            // Catppuccin Mocha lavender
            base_color: [180, 190, 254],
            curve: CurveParams::default(),
            smoothing: SmoothingRates::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading scene config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("loading scene config {}", path.display()))?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json).context("invalid scene JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing scene config")
    }

    /// Reject a bad geometry; clamp out-of-range smoothing rates
    pub fn validate(&mut self) -> Result<()> {
        self.geometry()?;
        let clamped = self.smoothing.clamp_in_place();
        if clamped > 0 {
            log::warn!("Clamped {clamped} smoothing rate(s) into [0, 1]");
        }
        Ok(())
    }

    pub fn geometry(&self) -> Result<GeometryConfig, ConfigError> {
        GeometryConfig::new(self.particle_count, self.scale)
    }

    pub fn morph_params(&self) -> MorphParams {
        let [r, g, b] = self.base_color;
        MorphParams {
            scale: self.scale,
            base_color: Color::from_srgb(r, g, b),
            ..MorphParams::default()
        }
    }
}

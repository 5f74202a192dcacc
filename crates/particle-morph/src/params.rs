//! Per-frame inputs and session-lifetime tuning for the morph engine

use crate::color::{palette, Color};

/// Smoothed control scalars driving one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSignals {
    /// Hand visibility, 0 (lost) to 1 (tracked)
    pub visible: f32,
    /// Pinch strength, 0 (touching) to 1 (open)
    pub pinch: f32,
    /// Orbit-to-mandala transition amount in [0, 1]
    pub magic: f32,
    /// Hand roll in radians
    pub rotation: f32,
    /// Blast amount in [0, 1]
    pub blast: f32,
}

impl Default for ControlSignals {
    fn default() -> Self {
        Self {
            visible: 0.0,
            pinch: 1.0,
            magic: 0.0,
            rotation: 0.0,
            blast: 0.0,
        }
    }
}

/// Everything a frame needs; no hidden clock
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Elapsed seconds since start
    pub time: f32,
    /// Seconds since the previous frame
    pub dt: f32,
    pub signals: ControlSignals,
}

/// Render tuning, static for a session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphParams {
    /// Overall scale factor (matches the geometry scale)
    pub scale: f32,
    /// Point size before attenuation
    pub base_size: f32,
    /// Camera distance from the origin along +Z
    pub camera_distance: f32,
    /// Minimum view depth used for attenuation
    pub near_depth: f32,
    /// Base particle color
    pub base_color: Color,
    /// Peak crossover noise displacement
    pub noise_amplitude: f32,
    /// Peak white flash mixed in mid-transition
    pub flash_strength: f32,
    /// Alpha multiplier while no hand is visible
    pub hidden_alpha: f32,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            base_size: 3.0,
            camera_distance: 40.0,
            near_depth: 1.0,
            base_color: palette::BASE,
            noise_amplitude: 0.8,
            flash_strength: 0.35,
            hidden_alpha: 0.45,
        }
    }
}

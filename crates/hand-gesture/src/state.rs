//! Per-sample hand snapshot

use glam::Vec2;

/// Coarse pose of one non-thumb finger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerPose {
    Extended,
    Curled,
    /// Inside the hysteresis band; counts as neither
    #[default]
    Neutral,
}

/// Fingertip with the mirrored outward direction from the palm center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FingerTip {
    pub position: Vec2,
    /// Unit length, or zero when the tip sits on the palm center
    pub direction: Vec2,
}

/// Snapshot produced by the extractor for each sample
///
/// Always replaced wholesale. The single exception is a sample without a
/// hand, which only clears `detected` and keeps everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandState {
    pub detected: bool,
    pub pinch_point: Vec2,
    pub palm_center: Vec2,
    /// 0 = touching, 1 = fully open
    pub pinch_strength: f32,
    /// Hand roll in radians
    pub rotation: f32,
    /// Thumb, index, middle, ring, pinky
    pub finger_tips: [FingerTip; 5],
    /// Index, middle, ring, pinky
    pub fingers: [FingerPose; 4],
    /// Fist flag; triggers the blast
    pub blast: bool,
}

impl HandState {
    pub fn curled_count(&self) -> usize {
        self.fingers
            .iter()
            .filter(|pose| **pose == FingerPose::Curled)
            .count()
    }

    pub fn extended_count(&self) -> usize {
        self.fingers
            .iter()
            .filter(|pose| **pose == FingerPose::Extended)
            .count()
    }
}

impl Default for HandState {
    fn default() -> Self {
        Self {
            detected: false,
            pinch_point: Vec2::splat(0.5),
            palm_center: Vec2::splat(0.5),
            // No hand reads as an open hand
            pinch_strength: 1.0,
            rotation: 0.0,
            finger_tips: [FingerTip::default(); 5],
            fingers: [FingerPose::Neutral; 4],
            blast: false,
        }
    }
}

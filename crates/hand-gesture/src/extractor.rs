//! Landmarks to `HandState`
//!
//! Pure per-sample geometry. The only memory is the previous snapshot, kept
//! so that a sample without a hand can clear `detected` while every other
//! field keeps its last value.

use glam::Vec2;

use crate::landmarks::*;
use crate::state::{FingerPose, FingerTip, HandState};

/// Thumb-index distance that reads as touching
pub const PINCH_TOUCH_DISTANCE: f32 = 0.02;
/// Thumb-index distance that reads as fully open
pub const PINCH_OPEN_DISTANCE: f32 = 0.17;

/// Tip-to-wrist over base-to-wrist ratio bounds
pub const EXTENDED_RATIO: f32 = 1.2;
pub const CURLED_RATIO: f32 = 0.9;

/// Fist needs this many curled fingers...
pub const FIST_MIN_CURLED: usize = 3;
/// ...and a pinch strength below this
pub const FIST_MAX_PINCH: f32 = 0.3;

const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// Normalized pinch openness from the 3D thumb-index distance
pub fn pinch_strength(hand: &HandLandmarks) -> f32 {
    let distance = hand.point(THUMB_TIP).distance(hand.point(INDEX_TIP));
    ((distance - PINCH_TOUCH_DISTANCE) / (PINCH_OPEN_DISTANCE - PINCH_TOUCH_DISTANCE))
        .clamp(0.0, 1.0)
}

pub fn pinch_point(hand: &HandLandmarks) -> Vec2 {
    (hand.planar(THUMB_TIP) + hand.planar(INDEX_TIP)) * 0.5
}

pub fn palm_center(hand: &HandLandmarks) -> Vec2 {
    let sum: Vec2 = PALM_POINTS.iter().map(|&i| hand.planar(i)).sum();
    sum / PALM_POINTS.len() as f32
}

/// Roll of the wrist-to-middle-base axis in (−π, π]
///
/// 0 with the hand pointing up, positive rolling right. The wrap sits at
/// "pointing down", a pose the hand cannot reach, so the signal stays
/// continuous across every reachable roll.
pub fn hand_rotation(hand: &HandLandmarks) -> f32 {
    let axis = hand.planar(MIDDLE_MCP) - hand.planar(WRIST);
    // image y grows downward, so "up" is -y
    axis.x.atan2(-axis.y)
}

/// Palm-to-tip direction, mirrored to match a selfie view
pub fn mirrored_direction(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let mirrored = Vec2::new(-delta.x, delta.y);
    let length = mirrored.length();
    if length < MIN_DIRECTION_LENGTH {
        Vec2::ZERO
    } else {
        mirrored / length
    }
}

pub fn finger_tips(hand: &HandLandmarks, palm: Vec2) -> [FingerTip; 5] {
    FINGER_TIPS.map(|tip| {
        let position = hand.planar(tip);
        FingerTip {
            position,
            direction: mirrored_direction(palm, position),
        }
    })
}

/// Extended / curled / neutral from tip and base reach relative to the wrist
pub fn classify_finger(hand: &HandLandmarks, base: usize, tip: usize) -> FingerPose {
    let wrist = hand.point(WRIST);
    let tip_reach = hand.point(tip).distance(wrist);
    let base_reach = hand.point(base).distance(wrist);

    if tip_reach > base_reach * EXTENDED_RATIO {
        FingerPose::Extended
    } else if tip_reach < base_reach * CURLED_RATIO {
        FingerPose::Curled
    } else {
        FingerPose::Neutral
    }
}

pub fn classify_fingers(hand: &HandLandmarks) -> [FingerPose; 4] {
    FINGER_CHAINS.map(|(base, tip)| classify_finger(hand, base, tip))
}

/// Fist: enough curled fingers and not a pinch
pub fn is_fist(fingers: &[FingerPose; 4], pinch: f32) -> bool {
    let curled = fingers.iter().filter(|f| **f == FingerPose::Curled).count();
    curled >= FIST_MIN_CURLED && pinch < FIST_MAX_PINCH
}

/// Full snapshot for one detected hand
pub fn hand_state(hand: &HandLandmarks) -> HandState {
    let palm = palm_center(hand);
    let pinch = pinch_strength(hand);
    let fingers = classify_fingers(hand);
    HandState {
        detected: true,
        pinch_point: pinch_point(hand),
        palm_center: palm,
        pinch_strength: pinch,
        rotation: hand_rotation(hand),
        finger_tips: finger_tips(hand, palm),
        fingers,
        blast: is_fist(&fingers, pinch),
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureExtractor {
    state: HandState,
}

impl GestureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one sample; `None` means the detector saw no hand
    pub fn process(&mut self, sample: Option<&HandLandmarks>) -> HandState {
        let next = match sample {
            Some(hand) => hand_state(hand),
            None => HandState {
                detected: false,
                ..self.state
            },
        };

        if next.detected != self.state.detected {
            log::debug!("Hand {}", if next.detected { "detected" } else { "lost" });
        }
        if next.blast != self.state.blast {
            log::debug!("Fist {}", if next.blast { "on" } else { "off" });
        }

        self.state = next;
        next
    }

    /// Most recent snapshot
    pub fn state(&self) -> &HandState {
        &self.state
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_pinch_strength_is_clamped() {
        assert_eq!(pinch_strength(&with_pinch_distance(0.0)), 0.0);
        assert_eq!(pinch_strength(&with_pinch_distance(0.01)), 0.0);
        assert_eq!(pinch_strength(&with_pinch_distance(0.5)), 1.0);
        let mid = pinch_strength(&with_pinch_distance(0.095));
        assert!((mid - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_pinch_uses_depth() {
        let mut hand = with_pinch_distance(0.0);
        hand.points[THUMB_TIP].z = 0.17;
        assert!((pinch_strength(&hand) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pinch_point_is_midpoint() {
        let hand = with_pinch_distance(0.1);
        let expected = (hand.planar(THUMB_TIP) + hand.planar(INDEX_TIP)) * 0.5;
        assert_eq!(pinch_point(&hand), expected);
    }

    #[test]
    fn test_palm_center_is_mean_of_six() {
        let hand = open_hand();
        let c = palm_center(&hand);
        let x = (0.5 + 0.42 + 0.44 + 0.5 + 0.56 + 0.61) / 6.0;
        let y = (0.8 + 0.74 + 0.6 * 4.0) / 6.0;
        assert!((c - Vec2::new(x, y)).length() < 1e-5);
    }

    #[test]
    fn test_upright_hand_has_zero_rotation() {
        assert!(hand_rotation(&open_hand()).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_follows_roll() {
        // middle base to the right of the wrist: hand rolled a quarter turn
        let mut hand = open_hand();
        hand.points[MIDDLE_MCP] = hand.points[WRIST] + Vec3::new(0.2, 0.0, 0.0);
        assert!((hand_rotation(&hand) - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_rotation_is_continuous_past_quarter_turns() {
        let mut previous: Option<f32> = None;
        for step in -40..=40 {
            let roll = step as f32 * 0.05;
            let mut hand = open_hand();
            let axis = Vec3::new(roll.sin(), -roll.cos(), 0.0) * 0.2;
            hand.points[MIDDLE_MCP] = hand.points[WRIST] + axis;
            let rotation = hand_rotation(&hand);
            assert!((rotation - roll).abs() < 1e-4, "roll {roll} read as {rotation}");
            if let Some(last) = previous {
                assert!((rotation - last).abs() < 0.06);
            }
            previous = Some(rotation);
        }
    }

    #[test]
    fn test_directions_are_mirrored_units() {
        let dir = mirrored_direction(Vec2::ZERO, Vec2::new(0.3, -0.4));
        assert!((dir - Vec2::new(-0.6, -0.8)).length() < 1e-6);
        assert_eq!(mirrored_direction(Vec2::ONE, Vec2::ONE), Vec2::ZERO);

        let state = hand_state(&open_hand());
        for tip in &state.finger_tips {
            assert!((tip.direction.length() - 1.0).abs() < 1e-5);
        }
        // index tip sits left of the palm in the image, so it points right mirrored
        assert!(state.finger_tips[1].direction.x > 0.0);
    }

    #[test]
    fn test_open_hand_fingers_extended() {
        let state = hand_state(&open_hand());
        assert_eq!(state.fingers, [FingerPose::Extended; 4]);
        assert!(!state.blast);
    }

    #[test]
    fn test_fist_triggers_blast() {
        let state = hand_state(&fist());
        assert_eq!(state.curled_count(), 4);
        assert!(state.pinch_strength < FIST_MAX_PINCH);
        assert!(state.blast);
    }

    #[test]
    fn test_pinch_is_not_a_fist() {
        let state = hand_state(&pinch());
        assert_eq!(state.pinch_strength, 0.0);
        assert!(state.curled_count() < FIST_MIN_CURLED);
        assert!(!state.blast);
    }

    #[test]
    fn test_fist_needs_three_curled() {
        let curled = FingerPose::Curled;
        let two = [curled, curled, FingerPose::Neutral, FingerPose::Extended];
        assert!(!is_fist(&two, 0.0));
        let three = [curled, curled, curled, FingerPose::Extended];
        assert!(is_fist(&three, 0.0));
        assert!(!is_fist(&three, 0.5));
    }

    #[test]
    fn test_fist_with_open_thumb_is_not_blast() {
        let mut hand = fist();
        hand.points[THUMB_TIP] = hand.points[INDEX_TIP] + Vec3::new(-0.2, 0.0, 0.0);
        assert!(!hand_state(&hand).blast);
    }

    #[test]
    fn test_neutral_band() {
        // tip reach equal to base reach sits between 0.9x and 1.2x
        let mut hand = open_hand();
        let base = hand.points[INDEX_MCP];
        hand.points[INDEX_TIP] = base;
        assert_eq!(classify_finger(&hand, INDEX_MCP, INDEX_TIP), FingerPose::Neutral);
    }

    #[test]
    fn test_missing_hand_only_clears_detected() {
        let mut extractor = GestureExtractor::new();
        let seen = extractor.process(Some(&fist()));
        let lost = extractor.process(None);
        assert!(!lost.detected);
        assert_eq!(HandState { detected: true, ..lost }, seen);
    }

    #[test]
    fn test_default_state_reads_as_open_and_undetected() {
        let extractor = GestureExtractor::new();
        assert!(!extractor.state().detected);
        assert_eq!(extractor.state().pinch_strength, 1.0);
    }
}

//! Synthetic hand poses and a scripted gesture sequence for headless runs

use glam::Vec2;
use hand_gesture::*;

const WRIST_AT: Vec2 = Vec2::new(0.5, 0.8);

/// Finger base x offsets from the wrist (index to pinky) and their height
const FINGER_X: [f32; 4] = [-0.06, 0.0, 0.06, 0.11];
const BASE_RISE: f32 = 0.2;

/// Joint heights above the wrist for an extended and a curled finger
const EXTENDED: [f32; 3] = [0.3, 0.37, 0.43];
const CURLED: [f32; 3] = [0.25, 0.18, 0.1];

/// Upright-hand landmarks in image coordinates, rolled by `roll` radians
///
/// `pinch` sets the thumb-index gap (0 touching, 1 fully open) and `curled`
/// folds all four fingers back toward the palm.
pub fn synthetic_hand(pinch: f32, curled: bool, roll: f32) -> HandLandmarks {
    // offsets are written with +y up and flipped into image space below
    let mut up = [Vec2::ZERO; LANDMARK_COUNT];
    up[THUMB_CMC] = Vec2::new(-0.08, 0.06);
    up[THUMB_MCP] = Vec2::new(-0.13, 0.12);
    up[THUMB_IP] = Vec2::new(-0.17, 0.18);

    let joints = if curled { CURLED } else { EXTENDED };
    for (finger, x) in FINGER_X.iter().enumerate() {
        let base = INDEX_MCP + finger * 4;
        up[base] = Vec2::new(*x, BASE_RISE);
        for (j, height) in joints.iter().enumerate() {
            up[base + 1 + j] = Vec2::new(*x, *height);
        }
    }
    let gap = PINCH_TOUCH_DISTANCE + (PINCH_OPEN_DISTANCE - PINCH_TOUCH_DISTANCE) * pinch;
    up[THUMB_TIP] = up[INDEX_TIP] + Vec2::new(-gap, 0.0);

    let turn = Vec2::from_angle(roll);
    let points = up.map(|offset| {
        let image = turn.rotate(Vec2::new(offset.x, -offset.y));
        (WRIST_AT + image).extend(0.0)
    });
    HandLandmarks::new(points)
}

/// One named step of the demo script
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub label: &'static str,
    pub seconds: f32,
    /// Pinch at the start and end of the step
    pub pinch: (f32, f32),
    pub roll: (f32, f32),
    pub curled: bool,
    pub present: bool,
}

pub const DEMO_SCRIPT: [ScriptStep; 6] = [
    ScriptStep {
        label: "open hand",
        seconds: 2.0,
        pinch: (1.0, 1.0),
        roll: (0.0, 0.0),
        curled: false,
        present: true,
    },
    ScriptStep {
        label: "closing pinch",
        seconds: 2.0,
        pinch: (1.0, 0.0),
        roll: (0.0, 0.0),
        curled: false,
        present: true,
    },
    ScriptStep {
        label: "twist",
        seconds: 3.0,
        pinch: (0.0, 0.0),
        roll: (0.0, 0.8),
        curled: false,
        present: true,
    },
    ScriptStep {
        label: "fist",
        seconds: 1.5,
        pinch: (0.05, 0.05),
        roll: (0.8, 0.8),
        curled: true,
        present: true,
    },
    ScriptStep {
        label: "release",
        seconds: 2.0,
        pinch: (1.0, 1.0),
        roll: (0.8, 0.0),
        curled: false,
        present: true,
    },
    ScriptStep {
        label: "hand lost",
        seconds: 2.0,
        pinch: (1.0, 1.0),
        roll: (0.0, 0.0),
        curled: false,
        present: false,
    },
];

/// Expand steps into samples at `rate` per second
pub fn script_samples(steps: &[ScriptStep], rate: f32) -> Vec<Option<HandLandmarks>> {
    let mut samples = Vec::new();
    for step in steps {
        let count = (step.seconds * rate).round().max(1.0) as usize;
        for i in 0..count {
            if !step.present {
                samples.push(None);
                continue;
            }
            let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 1.0 };
            let pinch = step.pinch.0 + (step.pinch.1 - step.pinch.0) * t;
            let roll = step.roll.0 + (step.roll.1 - step.roll.0) * t;
            samples.push(Some(synthetic_hand(pinch, step.curled, roll)));
        }
    }
    samples
}

pub fn script_duration(steps: &[ScriptStep]) -> f32 {
    steps.iter().map(|s| s.seconds).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinch_round_trips_through_extractor() {
        for p in [0.0, 0.25, 0.5, 1.0] {
            let state = hand_state(&synthetic_hand(p, false, 0.0));
            assert!((state.pinch_strength - p).abs() < 1e-4);
        }
    }

    #[test]
    fn test_roll_round_trips_through_extractor() {
        for roll in [-2.4, -1.6, -0.6, 0.0, 0.4, 1.2, 2.4] {
            let state = hand_state(&synthetic_hand(1.0, false, roll));
            assert!((state.rotation - roll).abs() < 1e-4);
        }
    }

    #[test]
    fn test_poses_classify() {
        let open = hand_state(&synthetic_hand(1.0, false, 0.3));
        assert_eq!(open.extended_count(), 4);
        assert!(!open.blast);

        let fist = hand_state(&synthetic_hand(0.05, true, 0.3));
        assert_eq!(fist.curled_count(), 4);
        assert!(fist.blast);
    }

    #[test]
    fn test_script_expansion() {
        let samples = script_samples(&DEMO_SCRIPT, 30.0);
        let expected: usize = DEMO_SCRIPT.iter().map(|s| (s.seconds * 30.0) as usize).sum();
        assert_eq!(samples.len(), expected);
        assert!(samples.last().is_some_and(|s| s.is_none()));
        assert!(samples[0].is_some());
    }
}

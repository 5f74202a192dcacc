//! Exponential smoothing of the control scalars
//!
//! Rates are expressed per 60 Hz frame and rescaled by the real frame time,
//! so the response is the same at any display refresh.

use particle_geometry::smoothstep;
use serde::{Deserialize, Serialize};

use crate::state::HandState;

/// Frame rate the smoothing rates are tuned for
pub const REFERENCE_FPS: f32 = 60.0;

/// Snapping channels closer than this to their target land on it exactly
pub const SNAP_EPSILON: f32 = 1e-4;

/// Pinch band mapped onto the transition amount (open edge, closed edge)
pub const MAGIC_BAND: (f32, f32) = (0.8, 0.3);

/// Per-signal smoothing rates (fraction of the gap closed per reference frame)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingRates {
    pub visible: f32,
    pub pinch: f32,
    pub magic: f32,
    pub rotation: f32,
    pub blast_onset: f32,
    pub blast_decay: f32,
}

impl Default for SmoothingRates {
    fn default() -> Self {
        Self {
            visible: 0.1,
            pinch: 0.15,
            // slow, so the morph reads as a transition rather than a cut
            magic: 0.05,
            rotation: 0.1,
            blast_onset: 0.08,
            // recovery is snappier than onset
            blast_decay: 0.15,
        }
    }
}

impl SmoothingRates {
    /// Rates outside [0, 1] are clamped; returns how many were
    pub fn clamp_in_place(&mut self) -> usize {
        let mut clamped = 0;
        for rate in [
            &mut self.visible,
            &mut self.pinch,
            &mut self.magic,
            &mut self.rotation,
            &mut self.blast_onset,
            &mut self.blast_decay,
        ] {
            let bounded = if rate.is_finite() { rate.clamp(0.0, 1.0) } else { 0.0 };
            if bounded != *rate {
                *rate = bounded;
                clamped += 1;
            }
        }
        clamped
    }
}

/// Fraction of the gap to close this frame
pub fn frame_factor(rate: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let rate = rate.clamp(0.0, 1.0);
    1.0 - (1.0 - rate).powf(dt * REFERENCE_FPS)
}

/// Transition target: 0 for an open hand, 1 for a closed pinch
pub fn magic_target(pinch: f32) -> f32 {
    smoothstep(MAGIC_BAND.0, MAGIC_BAND.1, pinch)
}

/// One smoothed scalar
///
/// A snapping channel lands exactly on its target once within
/// [`SNAP_EPSILON`]; a plain channel approaches it asymptotically and so
/// never takes a visible jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    value: f32,
    snap: bool,
}

impl Channel {
    pub fn new(value: f32) -> Self {
        Self { value, snap: false }
    }

    pub fn snapping(value: f32) -> Self {
        Self { value, snap: true }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Move toward `target` by `factor` of the gap
    pub fn step(&mut self, target: f32, factor: f32) -> f32 {
        let gap = target - self.value;
        if self.snap && gap.abs() < SNAP_EPSILON {
            self.value = target;
        } else {
            self.value += factor * gap;
        }
        self.value
    }
}

/// Current smoothed values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedSignals {
    pub visible: f32,
    pub pinch: f32,
    pub magic: f32,
    pub rotation: f32,
    pub blast: f32,
}

impl Default for SmoothedSignals {
    /// Rest state: no hand, open pinch, orbit pose
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

/// Raw targets derived from one hand snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalTargets {
    pub visible: f32,
    pub pinch: f32,
    pub magic: f32,
    pub rotation: f32,
    pub blast: f32,
}

impl SignalTargets {
    pub fn from_state(state: &HandState) -> Self {
        let pinch = if state.detected { state.pinch_strength } else { 1.0 };
        Self {
            visible: if state.detected { 1.0 } else { 0.0 },
            pinch,
            magic: magic_target(pinch),
            rotation: state.rotation,
            blast: if state.detected && state.blast { 1.0 } else { 0.0 },
        }
    }
}

/// Five independent smoothing channels fed from `HandState`
#[derive(Debug, Clone)]
pub struct SignalSmoother {
    rates: SmoothingRates,
    visible: Channel,
    pinch: Channel,
    magic: Channel,
    rotation: Channel,
    blast: Channel,
}

impl SignalSmoother {
    pub fn new(rates: SmoothingRates) -> Self {
        let rest = SmoothedSignals::default();
        Self {
            rates,
            visible: Channel::new(rest.visible),
            pinch: Channel::new(rest.pinch),
            // exact end states: full mandala, blast fully off
            magic: Channel::snapping(rest.magic),
            rotation: Channel::new(rest.rotation),
            blast: Channel::snapping(rest.blast),
        }
    }

    /// Advance every channel by `dt` seconds toward the targets of `state`
    pub fn update(&mut self, state: &HandState, dt: f32) -> SmoothedSignals {
        let target = SignalTargets::from_state(state);
        let rates = &self.rates;

        self.visible.step(target.visible, frame_factor(rates.visible, dt));
        self.pinch.step(target.pinch, frame_factor(rates.pinch, dt));
        self.magic.step(target.magic, frame_factor(rates.magic, dt));
        self.rotation.step(target.rotation, frame_factor(rates.rotation, dt));

        let blast_rate = if target.blast > self.blast.value() {
            rates.blast_onset
        } else {
            rates.blast_decay
        };
        self.blast.step(target.blast, frame_factor(blast_rate, dt));

        self.signals()
    }

    pub fn signals(&self) -> SmoothedSignals {
        SmoothedSignals {
            visible: self.visible.value(),
            pinch: self.pinch.value(),
            magic: self.magic.value(),
            rotation: self.rotation.value(),
            blast: self.blast.value(),
        }
    }

    /// Back to the rest state
    pub fn reset(&mut self) {
        *self = Self::new(self.rates);
    }
}

impl Default for SignalSmoother {
    fn default() -> Self {
        Self::new(SmoothingRates::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn detected(pinch: f32) -> HandState {
        HandState {
            detected: true,
            pinch_strength: pinch,
            ..HandState::default()
        }
    }

    #[test]
    fn test_frame_factor_matches_rate_at_reference() {
        assert!((frame_factor(0.1, DT) - 0.1).abs() < 1e-6);
        assert_eq!(frame_factor(0.1, 0.0), 0.0);
        // two half-frames equal one full frame
        let half = frame_factor(0.1, DT * 0.5);
        assert!(((1.0 - half) * (1.0 - half) - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_magic_target_band() {
        assert_eq!(magic_target(1.0), 0.0);
        assert_eq!(magic_target(0.8), 0.0);
        assert_eq!(magic_target(0.3), 1.0);
        assert_eq!(magic_target(0.0), 1.0);
        assert!((magic_target(0.55) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_undetected_targets_rest() {
        let state = HandState {
            detected: false,
            pinch_strength: 0.0,
            blast: true,
            ..HandState::default()
        };
        let t = SignalTargets::from_state(&state);
        assert_eq!(t.visible, 0.0);
        assert_eq!(t.pinch, 1.0);
        assert_eq!(t.magic, 0.0);
        assert_eq!(t.blast, 0.0);
    }

    #[test]
    fn test_visible_decays_without_jumping() {
        let mut smoother = SignalSmoother::default();
        for _ in 0..300 {
            smoother.update(&detected(1.0), DT);
        }
        let mut previous = smoother.signals().visible;
        assert!(previous > 0.9999);

        let lost = HandState::default();
        for _ in 0..240 {
            let v = smoother.update(&lost, DT).visible;
            assert!(v > 0.0 && v < previous);
            assert!(previous - v <= 0.1 * previous + 1e-6);
            previous = v;
        }
        assert!(previous < 1e-9);
    }

    #[test]
    fn test_only_snapping_channels_land_exactly() {
        let mut plain = Channel::new(1e-4);
        let mut snapping = Channel::snapping(1e-4);
        assert!(plain.step(0.0, 0.1) > 0.0);
        assert_eq!(snapping.step(0.0, 0.1), 0.0);
    }

    #[test]
    fn test_magic_converges_exactly() {
        let mut smoother = SignalSmoother::default();
        let mut last = 0.0;
        for _ in 0..600 {
            let m = smoother.update(&detected(0.0), DT).magic;
            assert!(m >= last && m <= 1.0);
            last = m;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_blast_recovers_faster_than_it_builds() {
        let fist = HandState {
            blast: true,
            ..detected(0.0)
        };
        let mut smoother = SignalSmoother::default();
        let mut onset_frames = 0;
        while smoother.update(&fist, DT).blast < 0.9 {
            onset_frames += 1;
        }
        let mut decay_frames = 0;
        while smoother.update(&detected(0.0), DT).blast > 0.1 {
            decay_frames += 1;
        }
        assert!(decay_frames < onset_frames);
    }

    #[test]
    fn test_rate_clamping() {
        let mut rates = SmoothingRates {
            visible: 1.5,
            magic: -0.2,
            pinch: f32::NAN,
            ..SmoothingRates::default()
        };
        assert_eq!(rates.clamp_in_place(), 3);
        assert_eq!(rates.visible, 1.0);
        assert_eq!(rates.magic, 0.0);
        assert_eq!(rates.pinch, 0.0);
    }

    #[test]
    fn test_reset_restores_rest_state() {
        let mut smoother = SignalSmoother::default();
        smoother.update(&detected(0.0), DT);
        smoother.reset();
        assert_eq!(smoother.signals(), SmoothedSignals::default());
    }
}

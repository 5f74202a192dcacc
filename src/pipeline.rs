//! Frame-loop wiring: latest hand state -> smoothing -> morph

use anyhow::Result;
use hand_gesture::{HandState, LatestSlot, SignalSmoother, SmoothedSignals, SmoothingRates};
use particle_geometry::{GeometryGenerator, ParticleIdentity};
use particle_morph::{ControlSignals, FrameInput, MorphEngine, MorphParams, ParticleVertex};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SceneConfig;

pub fn control_signals(smoothed: SmoothedSignals) -> ControlSignals {
    ControlSignals {
        visible: smoothed.visible,
        pinch: smoothed.pinch,
        magic: smoothed.magic,
        rotation: smoothed.rotation,
        blast: smoothed.blast,
    }
}

pub struct Pipeline {
    hand: LatestSlot<HandState>,
    smoother: SignalSmoother,
    engine: MorphEngine,
    signals: ControlSignals,
}

impl Pipeline {
    /// Generate the particle population and set up an empty hand slot
    pub fn new(config: &SceneConfig) -> Result<Self> {
        let generator = GeometryGenerator::new(config.geometry()?);
        let identities = match config.seed {
            Some(seed) => generator.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => generator.generate(),
        };
        Ok(Self::from_parts(
            identities,
            config.morph_params(),
            config.smoothing,
        ))
    }

    pub fn from_parts(
        identities: Vec<ParticleIdentity>,
        params: MorphParams,
        rates: SmoothingRates,
    ) -> Self {
        let smoother = SignalSmoother::new(rates);
        let signals = control_signals(smoother.signals());
        Self {
            hand: LatestSlot::new(HandState::default()),
            smoother,
            engine: MorphEngine::new(identities, params),
            signals,
        }
    }

    /// Handle for whoever produces hand states (usually the sampler thread)
    pub fn hand_slot(&self) -> LatestSlot<HandState> {
        self.hand.clone()
    }

    /// Advance one display frame and return the render buffer
    pub fn frame(&mut self, time: f32, dt: f32) -> &[ParticleVertex] {
        let hand = self.hand.latest();
        self.signals = control_signals(self.smoother.update(&hand, dt));
        self.engine.update(&FrameInput {
            time,
            dt,
            signals: self.signals,
        })
    }

    pub fn signals(&self) -> ControlSignals {
        self.signals
    }

    pub fn engine(&self) -> &MorphEngine {
        &self.engine
    }

    pub fn vertices(&self) -> &[ParticleVertex] {
        self.engine.vertices()
    }
}

//! Landmark sources and the sampling thread
//!
//! A source yields one sample at a time at its own cadence. The sampler
//! runs it on a dedicated thread, feeds each sample through a
//! `GestureExtractor` and publishes the resulting `HandState` into a
//! `LatestSlot`. The frame loop never waits on it.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::extractor::GestureExtractor;
use crate::handoff::LatestSlot;
use crate::landmarks::HandLandmarks;
use crate::state::HandState;

#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    /// Detector or camera could not be opened
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Unavailable(reason) => {
                write!(f, "landmark source unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Anything that can deliver hand landmark samples
pub trait LandmarkSource: Send + 'static {
    /// Acquire the underlying device; called once before sampling
    fn open(&mut self) -> Result<(), SourceError>;

    /// Block until the next sample. `None` ends the stream, `Some(None)`
    /// is a sample in which no hand was found.
    fn next_sample(&mut self) -> Option<Option<HandLandmarks>>;
}

/// Running sampler thread
pub struct SamplerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<usize>>,
}

impl SamplerHandle {
    /// Signal the thread and wait for it; returns the number of samples published
    ///
    /// The slot keeps whatever state was published last.
    pub fn stop(mut self) -> usize {
        self.shutdown()
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    fn shutdown(&mut self) -> usize {
        self.stop.store(true, Ordering::Release);
        match self.thread.take().map(JoinHandle::join) {
            Some(Ok(samples)) => samples,
            Some(Err(_)) => {
                log::warn!("Gesture sampler thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.shutdown();
        }
    }
}

/// Spawn `source` on its own thread, publishing into `slot`
pub fn spawn_sampler<S: LandmarkSource>(
    mut source: S,
    slot: LatestSlot<HandState>,
) -> SamplerHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        if let Err(err) = source.open() {
            log::warn!("{err}; hand input disabled");
            return 0;
        }
        log::info!("Gesture sampler started");

        let mut extractor = GestureExtractor::new();
        let mut published = 0;
        while !flag.load(Ordering::Acquire) {
            let Some(sample) = source.next_sample() else {
                log::info!("Landmark stream ended after {published} samples");
                break;
            };
            slot.publish(extractor.process(sample.as_ref()));
            published += 1;
        }
        published
    });

    SamplerHandle {
        stop,
        thread: Some(thread),
    }
}

/// Replays a prepared list of samples at a fixed interval
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: VecDeque<Option<HandLandmarks>>,
    interval: Duration,
    unavailable: Option<String>,
}

impl ScriptedSource {
    pub fn new(
        samples: impl IntoIterator<Item = Option<HandLandmarks>>,
        interval: Duration,
    ) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            interval,
            unavailable: None,
        }
    }

    /// A source whose `open` fails with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            samples: VecDeque::new(),
            interval: Duration::ZERO,
            unavailable: Some(reason.into()),
        }
    }
}

impl LandmarkSource for ScriptedSource {
    fn open(&mut self) -> Result<(), SourceError> {
        match &self.unavailable {
            Some(reason) => Err(SourceError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn next_sample(&mut self) -> Option<Option<HandLandmarks>> {
        let sample = self.samples.pop_front()?;
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Some(sample)
    }
}

//! # Hand Gesture
//!
//! Turns raw 21-point hand landmarks into smoothed control scalars: the
//! per-sample `GestureExtractor`, the `SignalSmoother`, and the sampling
//! thread that hands fresh `HandState` snapshots to the frame loop through
//! a single-slot handoff.

pub mod extractor;
pub mod handoff;
pub mod landmarks;
pub mod smoother;
pub mod source;
pub mod state;

pub use extractor::*;
pub use handoff::*;
pub use landmarks::*;
pub use smoother::*;
pub use source::*;
pub use state::*;

//! accel-path drives an object along a fixed path with constant-acceleration kinematics.
//!
//! A follower turns a handful of configured scalars (start time, start position, start
//! velocity, kill velocity, acceleration) plus the current frame time into a fractional
//! path position `u`, re-evaluated once per frame.
//!
//! # Evaluation overview
//!
//! 1. **Resolve**: host time unit -> exact [`Fps`] ([`TimeUnit`])
//! 2. **Integrate**: `(config, state_in, StepInput) -> Evaluation` ([`recompute`])
//! 3. **Map**: `u -> distance`, clamped at the path ends ([`to_distance`])
//! 4. **Commit**: [`PathFollower`] stores `Evaluation::state()` as the next step's input
//!
//! Evaluation is pull-based and deterministic: the same input snapshot always yields the
//! same result, and a follower only recomputes when its inputs or configuration changed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod motion;
mod path;
mod time;

pub use foundation::core::{BezPath, Fps, Point};
pub use foundation::error::{AccelPathError, AccelPathResult};
pub use motion::config::MotionConfig;
pub use motion::follower::PathFollower;
pub use motion::integrator::{Evaluation, recompute};
pub use motion::mapper::{start_fraction, to_distance};
pub use motion::playback::{FrameSample, FrameSpan, MAX_SPAN_SAMPLES, sample_span};
pub use motion::state::{MotionState, Phase, StepInput, StepWarning};
pub use path::curve::{ARCLEN_ACCURACY, ArcLengthSource, CurvePath};
pub use time::unit::{TimeUnit, resolve_fps};

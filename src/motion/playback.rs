use crate::foundation::core::Fps;
use crate::foundation::error::{AccelPathError, AccelPathResult};
use crate::motion::follower::PathFollower;
use crate::motion::integrator::Evaluation;

/// Largest number of samples a single span may hold.
pub const MAX_SPAN_SAMPLES: usize = 10_000_000;

/// Inclusive run of frame times `start, start + step, ..., <= end`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSpan {
    start: f64,
    end: f64,
    step: f64,
    count: usize,
}

impl FrameSpan {
    /// Create a validated span holding at most [`MAX_SPAN_SAMPLES`] samples.
    pub fn new(start: f64, end: f64, step: f64) -> AccelPathResult<Self> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(AccelPathError::validation("FrameSpan bounds must be finite"));
        }
        if step <= 0.0 {
            return Err(AccelPathError::validation("FrameSpan step must be > 0"));
        }
        if start > end {
            return Err(AccelPathError::validation("FrameSpan start must be <= end"));
        }

        // Tolerate accumulated rounding at the inclusive end.
        let intervals = (((end - start) / step) + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SPAN_SAMPLES as f64 {
            return Err(AccelPathError::validation(format!(
                "FrameSpan {start}..={end} by {step} exceeds {MAX_SPAN_SAMPLES} samples"
            )));
        }
        let count = intervals as usize + 1;

        Ok(Self {
            start,
            end,
            step,
            count,
        })
    }

    /// First frame time.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Last frame time (inclusive).
    pub fn end(self) -> f64 {
        self.end
    }

    /// Increment between samples.
    pub fn step(self) -> f64 {
        self.step
    }

    /// Number of samples in the span, between 1 and [`MAX_SPAN_SAMPLES`].
    pub fn len(self) -> usize {
        self.count
    }

    /// Always false for a validated span.
    pub fn is_empty(self) -> bool {
        self.count == 0
    }

    /// Frame times in increasing order. Computed from the index, not by
    /// repeated addition.
    pub fn times(self) -> impl Iterator<Item = f64> {
        (0..self.count).map(move |i| self.start + self.step * i as f64)
    }
}

/// One row of a playback run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Frame time that was evaluated.
    pub time: f64,
    /// Result at that time.
    pub evaluation: Evaluation,
}

/// Step `follower` across every time in `span`, in order.
///
/// Stops at the first failed step; samples computed before it are dropped
/// but their state stays committed on the follower.
#[tracing::instrument(skip(follower))]
pub fn sample_span(
    follower: &mut PathFollower,
    span: FrameSpan,
    arc_length: f64,
    fps: Fps,
) -> AccelPathResult<Vec<FrameSample>> {
    let mut out = Vec::new();
    for time in span.times() {
        let evaluation = follower.step(time, arc_length, fps)?;
        out.push(FrameSample { time, evaluation });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/playback.rs"]
mod tests;

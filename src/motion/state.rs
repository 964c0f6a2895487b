use crate::foundation::core::Fps;
use crate::foundation::error::{AccelPathError, AccelPathResult};
use crate::motion::config::MotionConfig;
use crate::motion::mapper;

/// Values persisted between evaluations of one follower.
///
/// These always describe the most recently *computed* step. A failed or
/// cache-served evaluation leaves them untouched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionState {
    /// Frame time of the previous computed step (base of `delta_t`).
    pub last_time: f64,
    /// Fractional position of the previous computed step (base position).
    pub last_u: f64,
    /// Current velocity; read back as the previous velocity on the next step.
    pub velocity: f64,
}

impl MotionState {
    /// Pre-start state for `config` on a path of `arc_length`.
    ///
    /// Matches what a step at or before `start_time` would persist.
    pub fn anchored(config: &MotionConfig, arc_length: f64) -> AccelPathResult<Self> {
        Ok(Self {
            last_time: config.start_time,
            last_u: mapper::start_fraction(config.start_position, arc_length)?,
            velocity: config.start_velocity,
        })
    }
}

/// External inputs sampled for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StepInput {
    /// Frame being evaluated. Successive steps must be non-decreasing.
    pub current_time: f64,
    /// Total path length supplied by the path geometry.
    pub arc_length: f64,
    /// Playback rate supplied by the time-unit resolver.
    pub fps: Fps,
}

impl StepInput {
    /// Bundle one evaluation's inputs.
    pub fn new(current_time: f64, arc_length: f64, fps: Fps) -> Self {
        Self {
            current_time,
            arc_length,
            fps,
        }
    }

    /// Reject inputs the integrator cannot divide or step with.
    pub fn validate(&self) -> AccelPathResult<()> {
        if !(self.arc_length.is_finite() && self.arc_length > 0.0) {
            return Err(AccelPathError::division_domain(self.arc_length));
        }
        self.fps.validate()?;
        if !self.current_time.is_finite() {
            return Err(AccelPathError::validation(format!(
                "current_time must be finite, got {}",
                self.current_time
            )));
        }
        Ok(())
    }
}

/// Regime the integrator was in for a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// `current_time <= start_time`: parked at the start position.
    PreStart,
    /// Previous velocity at or below the kill velocity: position held.
    Frozen,
    /// Integrating constant-acceleration motion.
    Moving,
}

impl Phase {
    /// Short lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreStart => "pre_start",
            Self::Frozen => "frozen",
            Self::Moving => "moving",
        }
    }
}

/// Non-fatal conditions observed while stepping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepWarning {
    /// Time went backwards; the step still ran with a negative `delta_t`.
    NonMonotonicTime {
        /// Persisted time of the previous step.
        last_time: f64,
        /// Requested time.
        current_time: f64,
    },
}

impl std::fmt::Display for StepWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonMonotonicTime {
                last_time,
                current_time,
            } => write!(
                f,
                "non-monotonic time: stepped from {last_time} back to {current_time}"
            ),
        }
    }
}

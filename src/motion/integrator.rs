use crate::foundation::error::{AccelPathError, AccelPathResult};
use crate::motion::config::MotionConfig;
use crate::motion::mapper;
use crate::motion::state::{MotionState, Phase, StepInput, StepWarning};

/// Fully computed result of one step.
///
/// All outputs are derived together; `state()` is the snapshot the caller
/// commits as the next step's input state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Evaluation {
    u: f64,
    velocity: f64,
    distance: f64,
    phase: Phase,
    warning: Option<StepWarning>,
    state: MotionState,
}

impl Evaluation {
    /// Fractional position along the path. May exceed 1 once the follower
    /// has run off the end.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Velocity after this step.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Clamped distance derived from `u`.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Time persisted for the next step's `delta_t`.
    pub fn last_time(&self) -> f64 {
        self.state.last_time
    }

    /// Fractional position persisted as the next step's base.
    pub fn last_u(&self) -> f64 {
        self.state.last_u
    }

    /// Which regime produced this result.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Non-fatal condition seen during the step, if any.
    pub fn warning(&self) -> Option<StepWarning> {
        self.warning
    }

    /// State to commit for the next step.
    pub fn state(&self) -> MotionState {
        self.state
    }
}

/// Run one step of the path-follower recurrence.
///
/// Pure in `(config, state_in, input)`: the same snapshot always yields the
/// same [`Evaluation`]. Callers must feed non-decreasing `current_time` across
/// committed steps; backwards time is reported as
/// [`StepWarning::NonMonotonicTime`] but still integrated.
///
/// # Errors
///
/// - [`AccelPathError::DivisionDomain`] when `arc_length <= 0`
/// - [`AccelPathError::InvalidFrameRate`] for a zero `fps` component
/// - [`AccelPathError::Validation`] for a non-finite `current_time`
/// - [`AccelPathError::Evaluation`] when the result overflows to a non-finite value
pub fn recompute(
    config: &MotionConfig,
    state_in: &MotionState,
    input: &StepInput,
) -> AccelPathResult<Evaluation> {
    input.validate()?;
    let StepInput {
        current_time,
        arc_length,
        fps,
    } = *input;

    let mut warning = None;
    let (phase, u, velocity, last_time) = if current_time <= config.start_time {
        // Anchor the next moving step's delta_t at start_time, however late it runs.
        (
            Phase::PreStart,
            config.start_position / arc_length,
            config.start_velocity,
            config.start_time,
        )
    } else {
        if current_time < state_in.last_time {
            warning = Some(StepWarning::NonMonotonicTime {
                last_time: state_in.last_time,
                current_time,
            });
        }

        if state_in.velocity <= config.kill_velocity {
            (Phase::Frozen, state_in.last_u, 0.0, current_time)
        } else {
            let (u, velocity) = integrate(config, state_in, current_time, arc_length, fps.as_f64());
            (Phase::Moving, u, velocity, current_time)
        }
    };

    if !(u.is_finite() && velocity.is_finite()) {
        return Err(AccelPathError::evaluation(format!(
            "step at time {current_time} produced non-finite u={u} velocity={velocity}"
        )));
    }

    if let Some(w) = &warning {
        tracing::warn!(%w, "stepping backwards in time; result is not validated");
    }
    tracing::debug!(
        phase = phase.as_str(),
        current_time,
        u,
        velocity,
        "recomputed follower"
    );

    Ok(Evaluation {
        u,
        velocity,
        distance: mapper::to_distance(u, arc_length, config.start_position),
        phase,
        warning,
        state: MotionState {
            last_time,
            last_u: u,
            velocity,
        },
    })
}

/// Constant-acceleration displacement from the persisted base.
///
/// Past the far end the velocity is held; before the near end `u` clamps to 0
/// while the velocity keeps advancing.
fn integrate(
    config: &MotionConfig,
    state_in: &MotionState,
    current_time: f64,
    arc_length: f64,
    fps: f64,
) -> (f64, f64) {
    let delta_t = current_time - state_in.last_time;
    let pos = state_in.last_u * arc_length
        + state_in.velocity / fps * delta_t
        + 0.5 * config.acceleration / (fps * fps) * (delta_t * delta_t);
    let u = pos / arc_length;

    if u > 1.0 {
        (u, state_in.velocity)
    } else {
        let velocity = state_in.velocity + config.acceleration * delta_t;
        (if u < 0.0 { 0.0 } else { u }, velocity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/integrator.rs"]
mod tests;

use crate::foundation::core::Fps;
use crate::foundation::error::AccelPathResult;
use crate::motion::config::MotionConfig;
use crate::motion::integrator::{Evaluation, recompute};
use crate::motion::state::{MotionState, StepInput};

/// One follower attached to a path.
///
/// Owns its configuration and the state committed by the last computed step.
/// Evaluation is pull-based: [`PathFollower::step`] recomputes only when the
/// input snapshot differs from the cached one or the configuration changed.
///
/// Steps must be requested in non-decreasing time order; the follower does
/// not reorder or reject backwards requests.
#[derive(Clone, Debug)]
pub struct PathFollower {
    config: MotionConfig,
    state: Option<MotionState>,
    last: Option<(StepInput, Evaluation)>,
}

impl PathFollower {
    /// Attach a follower with a validated configuration.
    pub fn new(config: MotionConfig) -> AccelPathResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: None,
            last: None,
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Replace the configuration and mark the cached result dirty.
    ///
    /// Committed state is kept, so raising `kill_velocity` or lowering it
    /// takes effect from the next step onward.
    pub fn set_config(&mut self, config: MotionConfig) -> AccelPathResult<()> {
        config.validate()?;
        self.config = config;
        self.last = None;
        Ok(())
    }

    /// Overwrite the committed velocity, e.g. to push a frozen follower back
    /// into motion. Ignored until the follower has been stepped once.
    pub fn set_velocity(&mut self, velocity: f64) {
        if let Some(state) = &mut self.state {
            state.velocity = velocity;
            self.last = None;
        }
    }

    /// State committed by the most recent computed step.
    pub fn state(&self) -> Option<&MotionState> {
        self.state.as_ref()
    }

    /// Most recent evaluation, if any.
    pub fn last(&self) -> Option<&Evaluation> {
        self.last.as_ref().map(|(_, eval)| eval)
    }

    /// Evaluate the follower at `current_time`.
    ///
    /// On error nothing is committed and the follower stays usable.
    #[tracing::instrument(skip(self))]
    pub fn step(
        &mut self,
        current_time: f64,
        arc_length: f64,
        fps: Fps,
    ) -> AccelPathResult<Evaluation> {
        let input = StepInput::new(current_time, arc_length, fps);
        if let Some((cached_input, eval)) = &self.last
            && *cached_input == input
        {
            tracing::trace!("inputs unchanged; serving cached evaluation");
            return Ok(*eval);
        }

        let state_in = match self.state {
            Some(state) => state,
            None => MotionState::anchored(&self.config, arc_length)?,
        };
        let eval = recompute(&self.config, &state_in, &input)?;

        self.state = Some(eval.state());
        self.last = Some((input, eval));
        Ok(eval)
    }

    /// Return to the pre-start phase, as if never evaluated.
    pub fn reset(&mut self) {
        self.state = None;
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/follower.rs"]
mod tests;

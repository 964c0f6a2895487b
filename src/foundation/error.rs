/// Convenience result type used across the crate.
pub type AccelPathResult<T> = Result<T, AccelPathError>;

/// Top-level error taxonomy for follower evaluation and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum AccelPathError {
    /// Invalid user-provided configuration or input data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The path's arc length cannot be divided by (zero, negative or non-finite).
    #[error("division domain error: arc length must be > 0, got {arc_length}")]
    DivisionDomain {
        /// Arc length observed at evaluation time.
        arc_length: f64,
    },

    /// Frame-rate resolution failed or an unusable rate was supplied.
    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(String),

    /// Errors while integrating a step.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AccelPathError {
    /// Build an [`AccelPathError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AccelPathError::DivisionDomain`] value.
    pub fn division_domain(arc_length: f64) -> Self {
        Self::DivisionDomain { arc_length }
    }

    /// Build an [`AccelPathError::InvalidFrameRate`] value.
    pub fn invalid_frame_rate(msg: impl Into<String>) -> Self {
        Self::InvalidFrameRate(msg.into())
    }

    /// Build an [`AccelPathError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build an [`AccelPathError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

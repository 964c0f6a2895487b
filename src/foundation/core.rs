use std::fmt;

use crate::foundation::error::{AccelPathError, AccelPathResult};

pub use kurbo::{BezPath, Point};

/// Frames-per-second represented as a rational `num/den`.
///
/// Drop-frame rates stay exact (`24000/1001`); evaluation converts to `f64`
/// once per step with [`Fps::as_f64`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AccelPathResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Whole-number rate (`num/1`).
    pub fn integer(num: u32) -> AccelPathResult<Self> {
        Self::new(num, 1)
    }

    /// Check a value that may have been built through the public fields.
    pub fn validate(self) -> AccelPathResult<()> {
        if self.den == 0 {
            return Err(AccelPathError::invalid_frame_rate("fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(AccelPathError::invalid_frame_rate("fps num must be > 0"));
        }
        Ok(())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{} (~{:.3})", self.num, self.den, self.as_f64())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

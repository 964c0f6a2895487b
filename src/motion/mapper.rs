//! Conversions between fractional path position and linear distance.

use crate::foundation::error::{AccelPathError, AccelPathResult};

/// Fractional position of a start offset along a path of `arc_length`.
pub fn start_fraction(start_position: f64, arc_length: f64) -> AccelPathResult<f64> {
    if !(arc_length.is_finite() && arc_length > 0.0) {
        return Err(AccelPathError::division_domain(arc_length));
    }
    Ok(start_position / arc_length)
}

/// Distance reported for fractional position `u`.
///
/// Out-of-range `u` is clamped to the path ends before mapping, so an object
/// that ran past the end still reports a bounded distance.
pub fn to_distance(u: f64, arc_length: f64, start_position: f64) -> f64 {
    if u >= 1.0 {
        arc_length - start_position
    } else if u <= 0.0 {
        start_position
    } else {
        u * arc_length - start_position
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/mapper.rs"]
mod tests;

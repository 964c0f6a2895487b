use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{AccelPathError, AccelPathResult};

/// User-edited configuration of one path follower.
///
/// Times are in frames, lengths in path units, velocities in units per second
/// and acceleration in units per second squared. Missing JSON keys take the
/// defaults of a freshly attached follower.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Frame at which motion may begin.
    pub start_time: f64,
    /// Distance from the path start where the follower sits before motion.
    pub start_position: f64,
    /// Velocity assigned while `time <= start_time`.
    pub start_velocity: f64,
    /// Once the previous velocity is at or below this value, motion freezes.
    pub kill_velocity: f64,
    /// Constant acceleration.
    pub acceleration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            start_time: 1.0,
            start_position: 0.0,
            start_velocity: 0.0,
            kill_velocity: 0.0,
            acceleration: 0.0,
        }
    }
}

impl MotionConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AccelPathResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| AccelPathError::validation(format!("parse follower config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AccelPathResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AccelPathError::validation(format!("open follower config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> AccelPathResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AccelPathError::serde(e.to_string()))
    }

    /// Check ranges: every field finite, `start_time >= 0`, `start_position >= 0`.
    pub fn validate(&self) -> AccelPathResult<()> {
        let fields = [
            ("start_time", self.start_time),
            ("start_position", self.start_position),
            ("start_velocity", self.start_velocity),
            ("kill_velocity", self.kill_velocity),
            ("acceleration", self.acceleration),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(AccelPathError::validation(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if self.start_time < 0.0 {
            return Err(AccelPathError::validation("start_time must be >= 0"));
        }
        if self.start_position < 0.0 {
            return Err(AccelPathError::validation("start_position must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/config.rs"]
mod tests;

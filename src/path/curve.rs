use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{AccelPathError, AccelPathResult};

/// Arc-length accuracy used for curve measurement, in path units.
pub const ARCLEN_ACCURACY: f64 = 1e-6;

/// Anything that can report the total length of the path being followed.
pub trait ArcLengthSource {
    /// Total path length in linear units.
    fn arc_length(&self) -> f64;
}

impl ArcLengthSource for f64 {
    fn arc_length(&self) -> f64 {
        *self
    }
}

/// A followable path backed by a kurbo [`BezPath`].
///
/// Segment lengths are measured once at construction.
#[derive(Clone, Debug)]
pub struct CurvePath {
    path: BezPath,
    seg_lengths: Vec<f64>,
    total: f64,
}

impl CurvePath {
    /// Measure `path`.
    pub fn new(path: BezPath) -> Self {
        let seg_lengths: Vec<f64> = path
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .collect();
        let total = seg_lengths.iter().sum();
        Self {
            path,
            seg_lengths,
            total,
        }
    }

    /// Parse SVG path data (`"M0,0 L100,0"`).
    pub fn from_svg(d: &str) -> AccelPathResult<Self> {
        let path = BezPath::from_svg(d.trim())
            .map_err(|e| AccelPathError::validation(format!("invalid svg path data: {e}")))?;
        Ok(Self::new(path))
    }

    /// Point at fractional position `u`, located by arc length.
    ///
    /// `u` is clamped to `[0, 1]`.
    pub fn point_at(&self, u: f64) -> AccelPathResult<Point> {
        let segs: Vec<PathSeg> = self.path.segments().collect();
        let Some(last) = segs.last() else {
            return Err(AccelPathError::validation("cannot sample an empty path"));
        };

        let mut remaining = u.clamp(0.0, 1.0) * self.total;
        for (seg, &len) in segs.iter().zip(&self.seg_lengths) {
            if remaining <= len {
                let t = if len > 0.0 {
                    seg.inv_arclen(remaining, ARCLEN_ACCURACY)
                } else {
                    0.0
                };
                return Ok(seg.eval(t));
            }
            remaining -= len;
        }
        Ok(last.eval(1.0))
    }
}

impl ArcLengthSource for CurvePath {
    fn arc_length(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/curve.rs"]
mod tests;

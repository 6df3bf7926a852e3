use crate::math::polar_2d::{to_polar, to_rect};
use crate::math::Point2;

/// The two radii bounding the mechanically usable cam profile region.
///
/// Derived once per parameter set by the limit solver and reused by the
/// profile generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitRadii {
    pub min_radius: f64,
    pub max_radius: f64,
}

impl LimitRadii {
    /// Creates a new limit pair.
    #[must_use]
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        Self {
            min_radius,
            max_radius,
        }
    }

    /// A limit pair whose clamp never fires.
    ///
    /// Lets a caller generate an unclamped profile after the solver
    /// reported a degenerate limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            min_radius: 0.0,
            max_radius: f64::INFINITY,
        }
    }

    /// Returns whether a radius lies within the usable region.
    #[must_use]
    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.min_radius && radius <= self.max_radius
    }

    /// Pulls a sample back by `offset` when its radius falls outside the
    /// limit circles.
    ///
    /// In-range points are returned unchanged. The correction is a fixed
    /// radial shift in both the above-max and below-min cases, matching
    /// the reference tool, not a projection onto the violated circle.
    #[must_use]
    pub fn clamp(&self, x: f64, y: f64, offset: f64) -> (f64, f64) {
        let (r, theta) = to_polar(x, y);
        if r > self.max_radius || r < self.min_radius {
            return to_rect(r - offset, theta);
        }
        (x, y)
    }
}

/// An ordered, closed sequence of cam profile points.
///
/// Sampling covers a full turn, so the first and last of the `s+1` points
/// are conceptually coincident. Purely derived data: recomputable at any
/// time from the same parameters, with an identical result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CamProfile {
    /// The ordered profile points.
    pub points: Vec<Point2>,
}

use tracing::debug;

use crate::error::{Result, SolveError};
use crate::geometry::{GearParameters, LimitRadii};
use crate::math::pressure_2d::{pressure_angle_deg, pressure_limit_radius};

/// Finds the pressure-angle limit circles for a parameter set.
///
/// Scans cam angles from 0 up to (but excluding) 180 degrees, recording
/// the first angle where the signed pressure angle drops below the
/// configured limit and the angle immediately before it first drops below
/// the negated limit. The two crossing angles map to the min and max
/// limit radii through the two-stage-gear model.
///
/// The default 1 degree step reproduces the reference tool exactly; it is
/// a linear scan, not a root-find.
pub struct SolveLimits {
    params: GearParameters,
    step_deg: f64,
}

impl SolveLimits {
    /// Creates a new solver with the reference 1 degree scan step.
    #[must_use]
    pub fn new(params: GearParameters) -> Self {
        Self {
            params,
            step_deg: 1.0,
        }
    }

    /// Sets a finer scan resolution, in degrees.
    ///
    /// Steps below 1.0 trade reference parity for crossing accuracy.
    #[must_use]
    pub fn with_step_deg(mut self, step_deg: f64) -> Self {
        self.step_deg = step_deg;
        self
    }

    /// Executes the scan, returning the limit radii.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegenerateLimit`] if either crossing is
    /// missing from the scanned range: the pressure angle never reached
    /// the limit, so no usable region exists and no sentinel radii are
    /// produced.
    pub fn execute(&self) -> Result<LimitRadii> {
        let p = self.params.pitch();
        let d = self.params.roller_diameter();
        let n = self.params.tooth_count_f();
        let limit_deg = self.params.pressure_angle_limit().to_degrees();

        let mut min_angle = -1.0;
        let mut max_angle = -1.0;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (180.0 / self.step_deg).ceil() as usize;
        for i in 0..steps {
            #[allow(clippy::cast_precision_loss)]
            let deg = i as f64 * self.step_deg;
            let angle = pressure_angle_deg(p, d, n, deg.to_radians());
            if angle < limit_deg && min_angle < 0.0 {
                min_angle = deg;
            }
            if angle < -limit_deg && max_angle < 0.0 {
                max_angle = deg - self.step_deg;
            }
        }

        if min_angle < 0.0 || max_angle < 0.0 {
            return Err(SolveError::DegenerateLimit { limit_deg }.into());
        }

        let e = self.params.eccentricity();
        let min_radius = pressure_limit_radius(p, d, e, n, min_angle.to_radians());
        let max_radius = pressure_limit_radius(p, d, e, n, max_angle.to_radians());
        debug!(min_angle, max_angle, min_radius, max_radius, "pressure-angle limits solved");

        Ok(LimitRadii::new(min_radius, max_radius))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HypogearError;

    fn reference() -> GearParameters {
        GearParameters::new(0.08, 0.15, 0.05, 10, 50_f64.to_radians(), 0.000_175, 100).unwrap()
    }

    #[test]
    fn reference_limits_are_ordered_and_positive() {
        let limits = SolveLimits::new(reference()).execute().unwrap();
        assert!(limits.min_radius > 0.0, "min={}", limits.min_radius);
        assert!(limits.max_radius > 0.0, "max={}", limits.max_radius);
        assert!(
            limits.min_radius < limits.max_radius,
            "min={} max={}",
            limits.min_radius,
            limits.max_radius
        );
    }

    #[test]
    fn limits_lie_inside_the_pin_ring() {
        let params = reference();
        let limits = SolveLimits::new(params).execute().unwrap();
        assert!(limits.max_radius < params.pin_ring_radius());
    }

    #[test]
    fn oversized_limit_is_degenerate() {
        // The signed pressure angle stays within [-90, 90] degrees, so a
        // 170 degree limit is never crossed on the negative side.
        let params =
            GearParameters::new(0.08, 0.15, 0.05, 10, 170_f64.to_radians(), 0.0, 100).unwrap();
        let err = SolveLimits::new(params).execute().unwrap_err();
        assert!(matches!(
            err,
            HypogearError::Solve(SolveError::DegenerateLimit { .. })
        ));
    }

    #[test]
    fn finer_step_stays_close_to_reference_step() {
        let coarse = SolveLimits::new(reference()).execute().unwrap();
        let fine = SolveLimits::new(reference())
            .with_step_deg(0.1)
            .execute()
            .unwrap();
        // One degree of scan resolution moves the crossing by at most a
        // couple of percent of the radius for these parameters.
        assert!((coarse.min_radius - fine.min_radius).abs() < 0.05);
        assert!((coarse.max_radius - fine.max_radius).abs() < 0.05);
    }

    #[test]
    fn deterministic_across_runs() {
        let a = SolveLimits::new(reference()).execute().unwrap();
        let b = SolveLimits::new(reference()).execute().unwrap();
        assert_eq!(a, b);
    }
}

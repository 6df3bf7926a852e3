use tracing::debug;

use crate::error::Result;
use crate::geometry::{Circle2, DriveGeometry, GearParameters};
use crate::math::Point2;

use super::{GeneratePins, GenerateProfile, SolveLimits};

/// End-to-end drive computation for one parameter set.
///
/// Runs the limit solver, the profile generator, and the pin placement,
/// then assembles the circles the host draws around them: the two limit
/// circles and the center bore at the eccentric cam center `(-e, 0)`, and
/// the pin ring about the origin.
///
/// `P` is the host's opaque sketch-placement token; it is carried into
/// the result untouched.
pub struct GenerateDrive<P> {
    params: GearParameters,
    plane: P,
}

impl<P> GenerateDrive<P> {
    /// Creates a new drive computation.
    #[must_use]
    pub fn new(params: GearParameters, plane: P) -> Self {
        Self { params, plane }
    }

    /// Executes the computation, returning the full drive geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the limit solve is degenerate or the profile
    /// sampling hits a rolling-angle singularity.
    pub fn execute(self) -> Result<DriveGeometry<P>> {
        let limits = SolveLimits::new(self.params).execute()?;
        let profile = GenerateProfile::new(self.params, limits).execute()?;
        let pins = GeneratePins::new(self.params).execute();

        let cam_center = Point2::new(-self.params.eccentricity(), 0.0);
        let bore_radius = self.params.roller_radius();
        debug!(
            points = profile.points.len(),
            pins = pins.len(),
            "drive geometry generated"
        );

        Ok(DriveGeometry {
            plane: self.plane,
            limits,
            limit_circles: [
                Circle2::new(cam_center, limits.min_radius),
                Circle2::new(cam_center, limits.max_radius),
            ],
            profile,
            bore_circle: Circle2::new(cam_center, bore_radius),
            pins,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> GearParameters {
        GearParameters::new(0.08, 0.15, 0.05, 10, 50_f64.to_radians(), 0.000_175, 100).unwrap()
    }

    #[test]
    fn reference_drive_end_to_end() {
        let drive = GenerateDrive::new(reference(), ()).execute().unwrap();

        assert_eq!(drive.profile.points.len(), 101);
        assert!(drive.limits.min_radius > 0.0);
        assert!(drive.limits.min_radius < drive.limits.max_radius);
        assert_eq!(drive.pins.circles().count(), 12);
    }

    #[test]
    fn cam_centered_circles_sit_at_minus_eccentricity() {
        let drive = GenerateDrive::new(reference(), ()).execute().unwrap();

        for circle in drive
            .limit_circles
            .iter()
            .chain(std::iter::once(&drive.bore_circle))
        {
            assert_relative_eq!(circle.center.x, -0.05);
            assert_relative_eq!(circle.center.y, 0.0);
        }
        assert_relative_eq!(drive.bore_circle.radius, 0.075);
        assert_relative_eq!(drive.limit_circles[0].radius, drive.limits.min_radius);
        assert_relative_eq!(drive.limit_circles[1].radius, drive.limits.max_radius);
    }

    #[test]
    fn plane_token_passes_through_untouched() {
        #[derive(Debug, Clone, PartialEq)]
        struct PlaneRef(&'static str);

        let drive = GenerateDrive::new(reference(), PlaneRef("XY"))
            .execute()
            .unwrap();
        assert_eq!(drive.plane, PlaneRef("XY"));
    }

    #[test]
    fn bolt_circle_override_moves_the_pin_ring() {
        let params = reference().with_bolt_circle(1.0).unwrap();
        let drive = GenerateDrive::new(params, ()).execute().unwrap();

        let first = &drive.pins.ring_pins[0];
        assert_relative_eq!(first.center.x, 1.0);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let a = GenerateDrive::new(reference(), ()).execute().unwrap();
        let b = GenerateDrive::new(reference(), ()).execute().unwrap();
        assert_eq!(a.profile, b.profile);
        assert_eq!(a.pins, b.pins);
        assert_eq!(a.limits, b.limits);
    }
}

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{ProfileError, Result};
use crate::geometry::{CamProfile, GearParameters, LimitRadii};
use crate::math::cam_2d::cam_point;
use crate::math::Point2;

/// Samples the cam curve and clamps it against the solved limit radii.
///
/// The curve is sampled at `s+1` angles covering a full turn; each sample
/// outside the limit circles is pulled back by the configured offset (see
/// [`LimitRadii::clamp`]). The host fits a smooth closed curve through
/// the resulting points.
pub struct GenerateProfile {
    params: GearParameters,
    limits: LimitRadii,
}

impl GenerateProfile {
    /// Creates a new profile generator.
    #[must_use]
    pub fn new(params: GearParameters, limits: LimitRadii) -> Self {
        Self { params, limits }
    }

    /// Executes the sampling pass, returning the ordered profile points.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Singularity`] if the rolling-angle
    /// denominator vanished at any sample. The pass always runs to
    /// completion first, so the error lists every affected sample index
    /// and a returned profile always holds exactly `s+1` points.
    pub fn execute(&self) -> Result<CamProfile> {
        let p = self.params.pitch();
        let d = self.params.roller_diameter();
        let e = self.params.eccentricity();
        let n = self.params.tooth_count_f();
        let offset = self.params.clamp_offset();

        let segments = self.params.segments();
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / segments as f64;

        let mut points = Vec::with_capacity(segments + 1);
        let mut singular = Vec::new();
        for i in 0..=segments {
            #[allow(clippy::cast_precision_loss)]
            let a = step * i as f64;
            match cam_point(p, d, e, n, a) {
                Some((x, y)) => {
                    let (x, y) = self.limits.clamp(x, y, offset);
                    points.push(Point2::new(x, y));
                }
                None => singular.push(i),
            }
        }

        if !singular.is_empty() {
            return Err(ProfileError::Singularity { samples: singular }.into());
        }
        debug!(points = points.len(), "cam profile sampled");

        Ok(CamProfile { points })
    }
}

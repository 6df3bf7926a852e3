use crate::error::{ParameterError, Result};

/// Design parameters for a two-stage hypocycloid cam drive.
///
/// Immutable once constructed; every generated entity is derived from a
/// single value of this type. Eccentricity is recommended to stay below
/// the roller radius but is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    pitch: f64,
    roller_diameter: f64,
    eccentricity: f64,
    tooth_count: u32,
    pressure_angle_limit: f64,
    clamp_offset: f64,
    segments: usize,
}

impl GearParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    ///
    /// * `pitch` - Per-tooth radial spacing (must be positive)
    /// * `roller_diameter` - Diameter of the roller pins (must be positive)
    /// * `eccentricity` - Offset between rotation and geometric center
    /// * `tooth_count` - Number of cam teeth (at least 1)
    /// * `pressure_angle_limit` - Pressure-angle limit in radians
    /// * `clamp_offset` - Radial correction applied to out-of-range samples
    /// * `segments` - Curve resolution (at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if `pitch` or `roller_diameter` is non-positive,
    /// or if `tooth_count` or `segments` is zero.
    pub fn new(
        pitch: f64,
        roller_diameter: f64,
        eccentricity: f64,
        tooth_count: u32,
        pressure_angle_limit: f64,
        clamp_offset: f64,
        segments: usize,
    ) -> Result<Self> {
        if pitch <= 0.0 {
            return Err(ParameterError::NonPositive {
                parameter: "pitch",
                value: pitch,
            }
            .into());
        }
        if roller_diameter <= 0.0 {
            return Err(ParameterError::NonPositive {
                parameter: "roller_diameter",
                value: roller_diameter,
            }
            .into());
        }
        if tooth_count == 0 {
            return Err(ParameterError::ZeroCount {
                parameter: "tooth_count",
            }
            .into());
        }
        if segments == 0 {
            return Err(ParameterError::ZeroCount {
                parameter: "segments",
            }
            .into());
        }

        Ok(Self {
            pitch,
            roller_diameter,
            eccentricity,
            tooth_count,
            pressure_angle_limit,
            clamp_offset,
            segments,
        })
    }

    /// Overrides the pitch from a bolt-circle radius, as `pitch = radius / n`.
    ///
    /// The override applies before any other computation sees the pitch.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is non-positive.
    pub fn with_bolt_circle(mut self, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(ParameterError::NonPositive {
                parameter: "bolt_circle_radius",
                value: radius,
            }
            .into());
        }
        self.pitch = radius / f64::from(self.tooth_count);
        Ok(self)
    }

    /// Resolved tooth pitch.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Roller pin diameter.
    #[must_use]
    pub fn roller_diameter(&self) -> f64 {
        self.roller_diameter
    }

    /// Roller pin radius (`d/2`).
    #[must_use]
    pub fn roller_radius(&self) -> f64 {
        self.roller_diameter / 2.0
    }

    /// Eccentricity of the cam.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Number of cam teeth.
    #[must_use]
    pub fn tooth_count(&self) -> u32 {
        self.tooth_count
    }

    /// Tooth count as a floating-point value for the curve equations.
    #[must_use]
    pub fn tooth_count_f(&self) -> f64 {
        f64::from(self.tooth_count)
    }

    /// Pressure-angle limit in radians.
    #[must_use]
    pub fn pressure_angle_limit(&self) -> f64 {
        self.pressure_angle_limit
    }

    /// Radial correction subtracted from out-of-range profile samples.
    #[must_use]
    pub fn clamp_offset(&self) -> f64 {
        self.clamp_offset
    }

    /// Number of curve segments per full turn.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Radius of the pin ring (`pitch * tooth_count`).
    #[must_use]
    pub fn pin_ring_radius(&self) -> f64 {
        self.pitch * f64::from(self.tooth_count)
    }
}

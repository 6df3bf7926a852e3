use super::{CamProfile, Circle2, LimitRadii, PinLayout};

/// Full geometric output of a drive computation.
///
/// Plain geometric data for the host to render: the host fits a smooth
/// closed curve through the profile points and draws the circles as-is.
/// `P` is the host's sketch-placement token; it moves through the
/// computation untouched and is never inspected.
#[derive(Debug, Clone)]
pub struct DriveGeometry<P> {
    /// Opaque plane/reference token for the host to resolve placement.
    pub plane: P,
    /// The solved pressure-angle limits.
    pub limits: LimitRadii,
    /// The min and max limit circles, centered on the eccentric cam center.
    pub limit_circles: [Circle2; 2],
    /// The sampled cam profile.
    pub profile: CamProfile,
    /// Center bore of the cam, centered on the eccentric cam center.
    pub bore_circle: Circle2,
    /// Roller pins and center pin.
    pub pins: PinLayout,
}

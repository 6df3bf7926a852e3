use std::f64::consts::TAU;

use crate::geometry::{Circle2, GearParameters, PinLayout};
use crate::math::Point2;

/// Places the roller pins of the output ring.
///
/// Pin `i` sits at `p*n * (cos(2*pi*i/(n+1)), sin(2*pi*i/(n+1)))` for
/// `i = 0..=n`, all of radius `d/2`, with one more pin of the same radius
/// at the origin. Infallible: the divisor `n+1` is at least 2 for any
/// validated parameter set.
pub struct GeneratePins {
    params: GearParameters,
}

impl GeneratePins {
    /// Creates a new pin placement operation.
    #[must_use]
    pub fn new(params: GearParameters) -> Self {
        Self { params }
    }

    /// Executes the placement, returning the pin layout.
    #[must_use]
    pub fn execute(&self) -> PinLayout {
        let ring_radius = self.params.pin_ring_radius();
        let pin_radius = self.params.roller_radius();
        let count = self.params.tooth_count() + 1;

        let mut ring_pins = Vec::with_capacity(count as usize);
        for i in 0..count {
            let angle = TAU / f64::from(count) * f64::from(i);
            let center = Point2::new(ring_radius * angle.cos(), ring_radius * angle.sin());
            ring_pins.push(Circle2::new(center, pin_radius));
        }

        PinLayout {
            ring_pins,
            center_pin: Circle2::new(Point2::origin(), pin_radius),
        }
    }
}

use super::Circle2;

/// Roller-pin circles of the output ring, plus the center pin.
///
/// The ring holds `n+1` pins of radius `d/2` evenly spaced on a circle of
/// radius `p*n` about the origin; the center pin sits at the origin with
/// the same radius.
#[derive(Debug, Clone, PartialEq)]
pub struct PinLayout {
    /// Ring pins, in placement order starting at angle zero.
    pub ring_pins: Vec<Circle2>,
    /// The pin at the origin.
    pub center_pin: Circle2,
}

impl PinLayout {
    /// All circles in order: the ring pins followed by the center pin.
    pub fn circles(&self) -> impl Iterator<Item = &Circle2> {
        self.ring_pins.iter().chain(std::iter::once(&self.center_pin))
    }

    /// Total number of circles (`n+2`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring_pins.len() + 1
    }

    /// Always false: the layout holds at least the center pin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

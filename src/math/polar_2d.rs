//! Polar/rectangular conversion in the cam's local 2D frame.

/// Converts rectangular coordinates to polar form.
///
/// Returns `(r, theta)` with `theta = atan2(y, x)` in `(-pi, pi]`.
/// At the origin, `r = 0` and `theta = 0`.
#[must_use]
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    ((x * x + y * y).sqrt(), y.atan2(x))
}

/// Converts polar coordinates back to rectangular form.
#[must_use]
pub fn to_rect(r: f64, theta: f64) -> (f64, f64) {
    (r * theta.cos(), r * theta.sin())
}

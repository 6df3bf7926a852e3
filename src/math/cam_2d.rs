//! Parametric equations of the hypocycloid cam curve.
//!
//! The cam is traced by rolling the tooth circle inside the pin ring while
//! holding the roller of diameter `d` against the contact point. All
//! functions take the resolved pitch `p`, so a bolt-circle override has
//! already been applied by the time they are called.

/// Rolling-contact angle of the roller against the cam at cam angle `a`.
///
/// `phi = atan(sin(n*a) / (cos(n*a) + n*p/(e*(n+1))))`
///
/// Returns `None` when the denominator vanishes; callers skip the affected
/// sample instead of aborting the scan.
#[must_use]
pub fn rolling_angle(a: f64, e: f64, n: f64, p: f64) -> Option<f64> {
    let denom = (n * a).cos() + (n * p) / (e * (n + 1.0));
    if denom.abs() < 1e-12 {
        return None;
    }
    Some(((n * a).sin() / denom).atan())
}

/// Point on the cam profile at cam angle `a`.
///
/// Hypocycloid with roller offset:
///
/// `x(a) = n*p*cos(a) + e*cos((n+1)*a) - (d/2)*cos(phi+a)`
/// `y(a) = n*p*sin(a) + e*sin((n+1)*a) - (d/2)*sin(phi+a)`
///
/// where `phi` is the rolling angle. `None` propagates a rolling-angle
/// singularity at this sample.
#[must_use]
pub fn cam_point(p: f64, d: f64, e: f64, n: f64, a: f64) -> Option<(f64, f64)> {
    let phi = rolling_angle(a, e, n, p)?;
    let x = n * p * a.cos() + e * ((n + 1.0) * a).cos() - d / 2.0 * (phi + a).cos();
    let y = n * p * a.sin() + e * ((n + 1.0) * a).sin() - d / 2.0 * (phi + a).sin();
    Some((x, y))
}

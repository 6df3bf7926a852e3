//! Pressure-angle formulas for the two-stage roller-gear model.
//!
//! The cam and its pin ring are modelled as a gear pair with effective
//! pitch radius `rg = p*n/sqrt(2)`. The signed pressure angle flips sign
//! as the contact sweeps through the usable region; the two crossings of
//! the configured limit bound the mechanically valid part of the profile.

use std::f64::consts::SQRT_2;

/// Pressure angle at cam angle `a`, in degrees.
///
/// `asin((r3*cos(a) - rg) / (pp + d/2))` with `r3 = p*n`, `rg = r3/sqrt(2)`
/// and the effective pin-path radius
/// `pp = rg*sqrt(2 + 1 - 2*sqrt(2)*cos(a)) - d/2`.
///
/// Returns NaN where the asin argument leaves `[-1, 1]`; NaN compares
/// false against any threshold, so a scan treats such angles as no
/// crossing.
#[must_use]
pub fn pressure_angle_deg(p: f64, d: f64, n: f64, a: f64) -> f64 {
    let ex = SQRT_2;
    let r3 = p * n;
    let rg = r3 / ex;
    let pp = rg * (ex * ex + 1.0 - 2.0 * ex * a.cos()).sqrt() - d / 2.0;
    ((r3 * a.cos() - rg) / (pp + d / 2.0)).asin().to_degrees()
}

/// Radius from the eccentric cam center to the pressure-limit circle, for
/// a cam angle `a` at which the pressure angle crosses the limit.
///
/// `q` is the distance between the effective gear centers at `a`; the
/// contact point sits `d/2` short of `q` along the center line, shifted
/// by the eccentricity `e`.
#[must_use]
pub fn pressure_limit_radius(p: f64, d: f64, e: f64, n: f64, a: f64) -> f64 {
    let ex = SQRT_2;
    let r3 = p * n;
    let rg = r3 / ex;
    let q = (r3 * r3 + rg * rg - 2.0 * r3 * rg * a.cos()).sqrt();
    let x = rg - e + (q - d / 2.0) * (r3 * a.cos() - rg) / q;
    let y = (q - d / 2.0) * r3 * a.sin() / q;
    (x * x + y * y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    #[test]
    fn pressure_angle_is_90_degrees_at_zero() {
        // At a=0 the asin argument reduces to rg*(sqrt(2)-1) over itself.
        let pa = pressure_angle_deg(0.08, 0.15, 10.0, 0.0);
        assert!((pa - 90.0).abs() < TOL, "pa={pa}");
    }

    #[test]
    fn pressure_angle_goes_negative_past_quarter_turn() {
        // At a=pi/2 the numerator r3*cos(a) - rg is negative.
        let pa = pressure_angle_deg(0.08, 0.15, 10.0, FRAC_PI_2);
        assert!(pa < 0.0, "pa={pa}");
    }

    #[test]
    fn pressure_angle_monotone_drop_near_start() {
        let a0 = pressure_angle_deg(0.08, 0.15, 10.0, 10_f64.to_radians());
        let a1 = pressure_angle_deg(0.08, 0.15, 10.0, 40_f64.to_radians());
        assert!(a0 > a1, "a0={a0} a1={a1}");
    }

    #[test]
    fn limit_radius_positive_and_bounded() {
        // The limit circle lies inside the pin ring (radius p*n = 0.8).
        for deg in [20_u32, 60, 110, 160] {
            let r = pressure_limit_radius(0.08, 0.15, 0.05, 10.0, f64::from(deg).to_radians());
            assert!(r > 0.0 && r < 0.8, "deg={deg} r={r}");
        }
    }
}

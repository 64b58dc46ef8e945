//! Mean and perturbed longitude of the lunar ascending node (Rahu).
//!
//! Rahu is the Moon's ascending node; Ketu the descending node, 180 deg
//! away. The mean node regresses ~19.34 deg/year; the true node adds
//! periodic perturbations keyed on the Moon's elongation and argument
//! of latitude.
//!
//! By Vedic convention both nodes are always flagged retrograde and
//! carry a fixed nominal speed; they are not differentiated numerically.

use jataka_time::jd_tt_to_centuries;

use crate::normalize_360;
use crate::nutation::fundamental_arguments_deg;

/// Nominal node speed in degrees/day (mean regression rate).
pub const RAHU_NOMINAL_SPEED: f64 = -0.052_953_9;

/// Ketu shares Rahu's rate.
pub const KETU_NOMINAL_SPEED: f64 = RAHU_NOMINAL_SPEED;

/// Perturbed (true) longitude of the ascending node in degrees [0, 360).
///
/// Mean node plus the two dominant periodic corrections (elongation-
/// and latitude-argument-based) and two smaller companions.
pub fn rahu_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let [d, m, _mp, f, om] = fundamental_arguments_deg(t);

    let correction = -1.4979 * (2.0 * (d - f)).to_radians().sin()
        - 0.1500 * m.to_radians().sin()
        - 0.1226 * (2.0 * d).to_radians().sin()
        + 0.1176 * (2.0 * f).to_radians().sin();

    normalize_360(om + correction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::calendar_to_jd;

    #[test]
    fn node_at_j2000() {
        // Mean node at J2000.0 is 125.0445 deg; true node within ~1.8 deg.
        let lon = rahu_longitude_deg(2_451_545.0);
        assert!((lon - 125.04).abs() < 2.0, "Rahu = {lon}");
    }

    #[test]
    fn node_regresses() {
        // Over a year the node moves backward by ~19.3 deg.
        let jd = calendar_to_jd(2010, 1, 1.0);
        let a = rahu_longitude_deg(jd);
        let b = rahu_longitude_deg(jd + 365.25);
        let motion = crate::wrap_pm180(b - a);
        assert!((-22.0..=-17.0).contains(&motion), "annual motion = {motion}");
    }

    #[test]
    fn full_cycle_18_6_years() {
        let jd = calendar_to_jd(2000, 1, 1.0);
        let a = rahu_longitude_deg(jd);
        let b = rahu_longitude_deg(jd + 6_798.38);
        assert!(crate::wrap_pm180(b - a).abs() < 3.0, "a={a} b={b}");
    }

    #[test]
    fn nominal_speed_is_retrograde() {
        assert!(RAHU_NOMINAL_SPEED < 0.0);
        assert_eq!(RAHU_NOMINAL_SPEED, KETU_NOMINAL_SPEED);
    }
}

//! Greenwich and local mean sidereal time.
//!
//! Source: Meeus, Astronomical Algorithms, ch. 12 (eq. 12.4).

use crate::julian::J2000_JD;

/// Greenwich Mean Sidereal Time at a given UT Julian Date, in degrees [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / 36_525.0;
    let theta =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Mean Sidereal Time from GMST and observer east longitude, degrees [0, 360).
pub fn local_sidereal_time_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn meeus_example_12a() {
        // 1987-04-10T00:00:00 UT → GMST 13h10m46.3668s = 197.693195 deg
        let jd = calendar_to_jd(1987, 4, 10.0);
        let gmst = gmst_deg(jd);
        assert!((gmst - 197.693_195).abs() < 1e-4, "gmst = {gmst}");
    }

    #[test]
    fn meeus_example_12b() {
        // 1987-04-10T19:21:00 UT → GMST 128.737873 deg
        let jd = calendar_to_jd(1987, 4, 10.0) + (19.0 + 21.0 / 60.0) / 24.0;
        let gmst = gmst_deg(jd);
        assert!((gmst - 128.737_873).abs() < 1e-3, "gmst = {gmst}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let gmst = 100.0;
        assert!((local_sidereal_time_deg(gmst, 85.0) - 185.0).abs() < 1e-12);
        assert!((local_sidereal_time_deg(gmst, -120.0) - 340.0).abs() < 1e-12);
    }

    #[test]
    fn gmst_in_range() {
        for i in 0..100 {
            let jd = 2_451_545.0 + i as f64 * 37.37;
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g));
        }
    }
}

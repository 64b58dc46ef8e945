//! Civil calendar ↔ Julian Day conversion.
//!
//! Uses the standard Gregorian/Julian calendar algorithm with the
//! 1582-10-15 Gregorian cutover: dates on or after 1582-10-15 are taken
//! as proleptic Gregorian, earlier dates as Julian calendar.
//!
//! Source: Meeus, Astronomical Algorithms, 2nd ed., chapter 7.

use crate::delta_t::delta_t_seconds;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a calendar date to Julian Day.
///
/// `day` may carry a fractional part for the time of day. The result is a
/// JD on whatever time scale the input was expressed in (UT in, UT out).
///
/// Dates before 1582-10-15 are interpreted in the Julian calendar.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    // Gregorian reform: 1582-10-04 (Julian) was followed by 1582-10-15.
    let gregorian =
        year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)));
    let b = if gregorian {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Day back to a calendar date.
///
/// Returns `(year, month, day)` where `day` carries the fractional time
/// of day. Inverse of [`calendar_to_jd`], honoring the same cutover.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    (year, month, day)
}

/// Convert a Julian Day in Universal Time to Terrestrial (Dynamical) Time.
///
/// `JD_TT = JD_UT + ΔT / 86400`, where ΔT comes from the empirical table
/// in [`crate::delta_t`].
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_ut);
    let decimal_year = year as f64 + (month as f64 - 0.5) / 12.0;
    jd_ut + delta_t_seconds(decimal_year) / 86_400.0
}

/// Julian centuries of TT since J2000.0.
pub fn jd_tt_to_centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36_525.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957-10-04.81 → JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn julian_calendar_date() {
        // Meeus example 7.b: 333-01-27.5 (Julian calendar) → JD 1842713.0
        let jd = calendar_to_jd(333, 1, 27.5);
        assert!((jd - 1_842_713.0).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn cutover_is_contiguous() {
        // 1582-10-04 (Julian) and 1582-10-15 (Gregorian) are adjacent days.
        let before = calendar_to_jd(1582, 10, 4.0);
        let after = calendar_to_jd(1582, 10, 15.0);
        assert!((after - before - 1.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip() {
        for &jd in &[2_451_545.0, 2_436_116.31, 2_460_000.25, 1_842_713.0] {
            let (y, m, d) = jd_to_calendar(jd);
            let back = calendar_to_jd(y, m, d);
            assert!((back - jd).abs() < 1e-6, "jd {jd} → {y}-{m}-{d} → {back}");
        }
    }

    #[test]
    fn tt_exceeds_ut_today() {
        let jd_ut = calendar_to_jd(2000, 1, 1.5);
        let jd_tt = jd_ut_to_tt(jd_ut);
        let dt_s = (jd_tt - jd_ut) * 86_400.0;
        // ΔT was ~64 s around 2000.
        assert!((50.0..80.0).contains(&dt_s), "ΔT = {dt_s}");
    }

    #[test]
    fn centuries_at_j2000() {
        assert!(jd_tt_to_centuries(J2000_JD).abs() < 1e-15);
    }
}

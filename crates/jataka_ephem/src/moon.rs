//! Apparent tropical ecliptic longitude of the Moon.
//!
//! Truncated periodic-series lunar theory: mean elements as quartic
//! polynomials in time, a main longitude series keyed on integer
//! multiples of (D, M, M′, F), planetary/venus-jupiter additive terms,
//! and nutation. The eccentricity factor E scales every term that
//! involves the solar mean anomaly.
//!
//! Truncated at 0.0003 deg; resulting accuracy is ~10″ over several
//! centuries around J2000, far below the width of any panchang segment.
//!
//! Source: Meeus, Astronomical Algorithms, ch. 47 (ELP-2000/82 reduction).

use jataka_time::jd_tt_to_centuries;

use crate::normalize_360;
use crate::nutation::nutation_longitude_deg;

/// One main-series term: multipliers of (D, M, M′, F) and the sine
/// amplitude in units of 1e-6 degrees.
struct LunarTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    amp: f64,
}

macro_rules! lt {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $amp:expr) => {
        LunarTerm { d: $d, m: $m, mp: $mp, f: $f, amp: $amp }
    };
}

/// Main longitude series (amplitudes in 1e-6 deg).
const MAIN_SERIES: [LunarTerm; 59] = [
    lt!(0, 0, 1, 0, 6_288_774.0),
    lt!(2, 0, -1, 0, 1_274_027.0),
    lt!(2, 0, 0, 0, 658_314.0),
    lt!(0, 0, 2, 0, 213_618.0),
    lt!(0, 1, 0, 0, -185_116.0),
    lt!(0, 0, 0, 2, -114_332.0),
    lt!(2, 0, -2, 0, 58_793.0),
    lt!(2, -1, -1, 0, 57_066.0),
    lt!(2, 0, 1, 0, 53_322.0),
    lt!(2, -1, 0, 0, 45_758.0),
    lt!(0, 1, -1, 0, -40_923.0),
    lt!(1, 0, 0, 0, -34_720.0),
    lt!(0, 1, 1, 0, -30_383.0),
    lt!(2, 0, 0, -2, 15_327.0),
    lt!(0, 0, 1, 2, -12_528.0),
    lt!(0, 0, 1, -2, 10_980.0),
    lt!(4, 0, -1, 0, 10_675.0),
    lt!(0, 0, 3, 0, 10_034.0),
    lt!(4, 0, -2, 0, 8_548.0),
    lt!(2, 1, -1, 0, -7_888.0),
    lt!(2, 1, 0, 0, -6_766.0),
    lt!(1, 0, -1, 0, -5_163.0),
    lt!(1, 1, 0, 0, 4_987.0),
    lt!(2, -1, 1, 0, 4_036.0),
    lt!(2, 0, 2, 0, 3_994.0),
    lt!(4, 0, 0, 0, 3_861.0),
    lt!(2, 0, -3, 0, 3_665.0),
    lt!(0, 1, -2, 0, -2_689.0),
    lt!(2, 0, -1, 2, -2_602.0),
    lt!(2, -1, -2, 0, 2_390.0),
    lt!(1, 0, 1, 0, -2_348.0),
    lt!(2, -2, 0, 0, 2_236.0),
    lt!(0, 1, 2, 0, -2_120.0),
    lt!(0, 2, 0, 0, -2_069.0),
    lt!(2, -2, -1, 0, 2_048.0),
    lt!(2, 0, 1, -2, -1_773.0),
    lt!(2, 0, 0, 2, -1_595.0),
    lt!(4, -1, -1, 0, 1_215.0),
    lt!(0, 0, 2, 2, -1_110.0),
    lt!(3, 0, -1, 0, -892.0),
    lt!(2, 1, 1, 0, -810.0),
    lt!(4, -1, -2, 0, 759.0),
    lt!(0, 2, -1, 0, -713.0),
    lt!(2, 2, -1, 0, -700.0),
    lt!(2, 1, -2, 0, 691.0),
    lt!(2, -1, 0, -2, 596.0),
    lt!(4, 0, 1, 0, 549.0),
    lt!(0, 0, 4, 0, 537.0),
    lt!(4, -1, 0, 0, 520.0),
    lt!(1, 0, -2, 0, -487.0),
    lt!(2, 1, 0, -2, -399.0),
    lt!(0, 0, 2, -2, -381.0),
    lt!(1, 1, 1, 0, 351.0),
    lt!(3, 0, -2, 0, -340.0),
    lt!(4, 0, -3, 0, 330.0),
    lt!(2, -1, 2, 0, 327.0),
    lt!(0, 2, 1, 0, -323.0),
    lt!(1, 1, -1, 0, 299.0),
    lt!(2, 0, 3, 0, 294.0),
];

/// Lunar mean elements at `t` centuries TT: (L′, D, M, M′, F) in degrees.
pub(crate) fn lunar_mean_elements_deg(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, referred to the mean equinox of date.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    // Mean elongation.
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    // Solar mean anomaly.
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    // Lunar mean anomaly.
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    // Argument of latitude.
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    (lp, d, m, mp, f)
}

/// Apparent tropical ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let (lp, d, m, mp, f) = lunar_mean_elements_deg(t);

    // Secular decrease of the solar eccentricity.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e2 = e * e;

    let mut sum_micro_deg = 0.0;
    for term in &MAIN_SERIES {
        let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
        let scale = match term.m.unsigned_abs() {
            0 => 1.0,
            1 => e,
            _ => e2,
        };
        sum_micro_deg += term.amp * scale * arg.to_radians().sin();
    }

    // Additive terms: Venus perturbation, node correction, Jupiter perturbation.
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    sum_micro_deg += 3_958.0 * a1.to_radians().sin();
    sum_micro_deg += 1_962.0 * (lp - f).to_radians().sin();
    sum_micro_deg += 318.0 * a2.to_radians().sin();

    let geometric = lp + sum_micro_deg * 1e-6;
    normalize_360(geometric + nutation_longitude_deg(jd_tt))
}

/// Dominant latitude-series terms (amplitudes in 1e-6 deg, sine of
/// D·d + M·m + M′·mp + F·f).
const LATITUDE_SERIES: [LunarTerm; 12] = [
    lt!(0, 0, 0, 1, 5_128_122.0),
    lt!(0, 0, 1, 1, 280_602.0),
    lt!(0, 0, 1, -1, 277_693.0),
    lt!(2, 0, 0, -1, 173_237.0),
    lt!(2, 0, -1, 1, 55_413.0),
    lt!(2, 0, -1, -1, 46_271.0),
    lt!(2, 0, 0, 1, 32_573.0),
    lt!(0, 0, 2, 1, 17_198.0),
    lt!(2, 0, 1, -1, 9_266.0),
    lt!(0, 0, 2, -1, 8_822.0),
    lt!(2, -1, 0, -1, 8_216.0),
    lt!(2, 0, -2, -1, 4_324.0),
];

/// Geocentric ecliptic latitude of the Moon in degrees.
///
/// Truncated to the dominant terms; accuracy ~30″, sufficient for
/// rise/set hour-angle work and position records.
pub fn moon_latitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let (_lp, d, m, mp, f) = lunar_mean_elements_deg(t);

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_micro_deg = 0.0;
    for term in &LATITUDE_SERIES {
        let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
        let scale = if term.m == 0 { 1.0 } else { e };
        sum_micro_deg += term.amp * scale * arg.to_radians().sin();
    }
    sum_micro_deg * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;
    use jataka_time::calendar_to_jd;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12T00:00 TT: apparent λ ≈ 133.1673 deg.
        let jd = calendar_to_jd(1992, 4, 12.0);
        let lon = moon_longitude_deg(jd);
        assert!((lon - 133.167).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn daily_motion_in_lunar_range() {
        // The Moon moves 11.8–15.4 deg/day.
        for i in 0..28 {
            let jd = calendar_to_jd(2021, 1, 1.0) + i as f64;
            let v = crate::longitude_speed_deg_per_day(moon_longitude_deg, jd);
            assert!((11.0..16.0).contains(&v), "speed = {v} at day {i}");
        }
    }

    #[test]
    fn sidereal_month_period() {
        // After one sidereal month (27.3217 d) the longitude returns
        // to roughly the same value.
        let jd = calendar_to_jd(2020, 6, 1.0);
        let a = moon_longitude_deg(jd);
        let b = moon_longitude_deg(jd + 27.321_661);
        assert!(crate::wrap_pm180(b - a).abs() < 5.0, "a={a} b={b}");
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        // The Moon's latitude stays within ±5.3 deg.
        for i in 0..30 {
            let jd = calendar_to_jd(2019, 3, 1.0) + i as f64;
            let b = moon_latitude_deg(jd);
            assert!(b.abs() < 5.4, "lat = {b} at day {i}");
        }
    }

    #[test]
    fn known_full_moon_opposition() {
        // 2000-01-21 04:40 UT was a full moon: Moon ≈ Sun + 180.
        let jd = calendar_to_jd(2000, 1, 21.0) + 4.7 / 24.0;
        let moon = moon_longitude_deg(jd);
        let sun = crate::sun::sun_longitude_deg(jd);
        let sep = crate::wrap_pm180(moon - sun - 180.0).abs();
        assert!(sep < 0.5, "separation from opposition = {sep}");
    }
}

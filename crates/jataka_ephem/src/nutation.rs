//! Nutation in longitude and mean obliquity of the ecliptic.
//!
//! The nutation series is a 9-term truncation of the IAU 1980 theory,
//! keyed on the lunar/solar mean anomalies, the Moon's argument of
//! latitude, the mean elongation, and the lunar node. Amplitudes follow
//! Meeus, Astronomical Algorithms, ch. 22; the truncation keeps every
//! term above 0.03″.

use jataka_time::jd_tt_to_centuries;

/// One nutation term: integer multipliers of (D, M, M', F, Ω) plus the
/// sine amplitude in units of 0.0001″ and its secular rate per century.
struct NutationTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    s: f64,
    s_t: f64,
}

/// Largest 9 terms of the IAU 1980 Δψ series.
const NUTATION_TERMS: [NutationTerm; 9] = [
    NutationTerm { d: 0, m: 0, mp: 0, f: 0, om: 1, s: -171_996.0, s_t: -174.2 },
    NutationTerm { d: -2, m: 0, mp: 0, f: 2, om: 2, s: -13_187.0, s_t: -1.6 },
    NutationTerm { d: 0, m: 0, mp: 0, f: 2, om: 2, s: -2_274.0, s_t: -0.2 },
    NutationTerm { d: 0, m: 0, mp: 0, f: 0, om: 2, s: 2_062.0, s_t: 0.2 },
    NutationTerm { d: 0, m: 1, mp: 0, f: 0, om: 0, s: 1_426.0, s_t: -3.4 },
    NutationTerm { d: 0, m: 0, mp: 1, f: 0, om: 0, s: 712.0, s_t: 0.1 },
    NutationTerm { d: -2, m: 1, mp: 0, f: 2, om: 2, s: -517.0, s_t: 1.2 },
    NutationTerm { d: 0, m: 0, mp: 0, f: 2, om: 1, s: -386.0, s_t: -0.4 },
    NutationTerm { d: 0, m: 0, mp: 1, f: 2, om: 2, s: -301.0, s_t: 0.0 },
];

/// Fundamental arguments (D, M, M', F, Ω) in degrees at `t` centuries TT.
pub(crate) fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    // Mean elongation of the Moon from the Sun.
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_9142 * t2 + t3 / 189_474.0;
    // Mean anomaly of the Sun.
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_1603 * t2 - t3 / 300_000.0;
    // Mean anomaly of the Moon.
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_6972 * t2 + t3 / 56_250.0;
    // Moon's argument of latitude.
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_6825 * t2 + t3 / 327_270.0;
    // Longitude of the Moon's ascending node.
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_0708 * t2 + t3 / 450_000.0;
    [d, m, mp, f, om]
}

/// Nutation in longitude Δψ in degrees at a given JD TT.
pub fn nutation_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let [d, m, mp, f, om] = fundamental_arguments_deg(t);

    let mut dpsi_01mas = 0.0;
    for term in &NUTATION_TERMS {
        let arg = term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * mp
            + term.f as f64 * f
            + term.om as f64 * om;
        dpsi_01mas += (term.s + term.s_t * t) * arg.to_radians().sin();
    }
    // 0.0001″ → degrees
    dpsi_01mas * 1e-4 / 3600.0
}

/// Mean obliquity of the ecliptic in degrees at a given JD TT.
///
/// ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    23.0 + 26.0 / 60.0
        + (21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t) / 3600.0
}

//! Delta-T: the difference between Terrestrial (Dynamical) Time and
//! Universal Time, `ΔT = TT − UT`, in seconds.
//!
//! From 1620 to 2030 a decadal table of observed/predicted values is
//! linearly interpolated. Outside that range the long-term parabolic
//! fit `ΔT = −20 + 32·u²` (u in centuries from 1820) is used.
//!
//! Sources: Meeus, Astronomical Algorithms, ch. 10; Espenak & Meeus
//! long-term polynomial fits (NASA eclipse publications).

/// First tabulated year.
const TABLE_START_YEAR: f64 = 1620.0;

/// Decadal ΔT values in seconds, 1620–2030 inclusive.
const DELTA_T_TABLE: [f64; 42] = [
    124.0, 85.0, 62.0, 48.0, 37.0, 26.0, 16.0, 10.0, 9.0, 10.0, // 1620–1710
    11.0, 11.0, 12.0, 13.0, 15.0, 16.0, 17.0, 17.0, 14.0, 13.0, // 1720–1810
    12.0, 8.0, 6.0, 7.0, 8.0, 2.0, -5.0, -6.0, -3.0, 10.0, // 1820–1910
    21.0, 24.0, 24.0, 29.0, 33.0, 40.0, 51.0, 57.0, 64.0, 66.0, // 1920–2010
    69.0, 72.0, // 2020–2030
];

/// Long-term parabolic extrapolation, centered on 1820.
fn parabolic_delta_t(decimal_year: f64) -> f64 {
    let u = (decimal_year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year (e.g. `2000.04` for mid-January 2000).
///
/// Inside 1620–2030: linear interpolation of the decadal table.
/// Outside: parabolic extrapolation.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let last_year = TABLE_START_YEAR + 10.0 * (DELTA_T_TABLE.len() - 1) as f64;
    if !(TABLE_START_YEAR..=last_year).contains(&decimal_year) {
        return parabolic_delta_t(decimal_year);
    }

    let pos = (decimal_year - TABLE_START_YEAR) / 10.0;
    let idx = (pos.floor() as usize).min(DELTA_T_TABLE.len() - 2);
    let frac = pos - idx as f64;
    DELTA_T_TABLE[idx] + frac * (DELTA_T_TABLE[idx + 1] - DELTA_T_TABLE[idx])
}

//! Analytic geocentric ephemerides for the nine grahas.
//!
//! This crate provides:
//! - Sun: two-body Kepler solution with nutation and annual aberration
//! - Moon: truncated periodic-series lunar theory
//! - Mercury/Venus/Mars/Jupiter/Saturn: heliocentric Keplerian elements
//!   reduced to geocentric ecliptic coordinates
//! - Rahu/Ketu: perturbed mean lunar node
//! - Nutation in longitude and mean obliquity of the ecliptic
//!
//! All longitudes are apparent tropical ecliptic longitudes in degrees
//! [0, 360); all epochs are Julian Days on the TT (dynamical) scale.
//! Sidereal reduction is the caller's concern.
//!
//! Clean-room implementation from standard published theory (Meeus,
//! Standish approximate planetary elements).

pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod nutation;
pub mod planets;
pub mod sun;

pub use kepler::eccentric_anomaly;
pub use moon::{moon_latitude_deg, moon_longitude_deg};
pub use nodes::{KETU_NOMINAL_SPEED, RAHU_NOMINAL_SPEED, rahu_longitude_deg};
pub use nutation::{mean_obliquity_deg, nutation_longitude_deg};
pub use planets::{Planet, planet_position};
pub use sun::sun_longitude_deg;

/// Step used for finite-difference speed estimation, in days.
pub const SPEED_STEP_DAYS: f64 = 0.1;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Wrap an angle difference to (−180, 180] degrees.
pub fn wrap_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Longitudinal speed in degrees/day by backward finite difference.
///
/// Recomputes the longitude at `jd_tt − 0.1` day, wraps the delta to
/// (−180, 180], and divides by the step. Negative speed means retrograde.
pub fn longitude_speed_deg_per_day(f: impl Fn(f64) -> f64, jd_tt: f64) -> f64 {
    let now = f(jd_tt);
    let before = f(jd_tt - SPEED_STEP_DAYS);
    wrap_pm180(now - before) / SPEED_STEP_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_zero_crossing() {
        assert!((wrap_pm180(358.0) - (-2.0)).abs() < 1e-12);
        assert!((wrap_pm180(2.0) - 2.0).abs() < 1e-12);
        assert!((wrap_pm180(180.0) - 180.0).abs() < 1e-12);
        assert!((wrap_pm180(-180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn speed_of_linear_function() {
        let v = longitude_speed_deg_per_day(|jd| normalize_360(10.0 + 3.0 * jd), 1234.5);
        assert!((v - 3.0).abs() < 1e-9);
    }

    #[test]
    fn speed_across_wraparound() {
        // 359.95 deg at t-0.1, 0.05 deg at t → +1 deg/day, not -3599.
        let v = longitude_speed_deg_per_day(|jd| normalize_360(jd), 360.05);
        assert!((v - 1.0).abs() < 1e-9);
    }
}

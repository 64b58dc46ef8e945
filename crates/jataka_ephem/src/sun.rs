//! Apparent tropical ecliptic longitude of the Sun.
//!
//! Two-body Kepler solution from mean longitude, mean anomaly, and
//! eccentricity polynomials, then nutation in longitude and annual
//! aberration. Accuracy is a few arcseconds over ±2 millennia, well
//! within the needs of chart computation.
//!
//! Source: Meeus, Astronomical Algorithms, ch. 25.

use jataka_time::jd_tt_to_centuries;

use crate::kepler::eccentric_anomaly;
use crate::normalize_360;
use crate::nutation::nutation_longitude_deg;

/// Annual aberration constant in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Geometric true longitude and radius vector (AU) of the Sun.
///
/// Returns `(true_longitude_deg, radius_au)`.
pub(crate) fn sun_true_longitude_and_radius(jd_tt: f64) -> (f64, f64) {
    let t = jd_tt_to_centuries(jd_tt);

    // Geometric mean longitude and mean anomaly.
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let m_rad = normalize_360(m).to_radians();
    let big_e = eccentric_anomaly(m_rad, e);

    // True anomaly from the eccentric anomaly.
    let nu = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (big_e / 2.0).tan()).atan();
    // Equation of center = ν − M, applied to the mean longitude.
    let center_deg = (nu - m_rad).to_degrees();

    let radius_au = 1.000_001_018 * (1.0 - e * big_e.cos());
    (normalize_360(l0 + center_deg), radius_au)
}

/// Apparent tropical ecliptic longitude of the Sun in degrees [0, 360).
///
/// Applies nutation in longitude and annual aberration (−20.4898″/R)
/// to the geometric true longitude.
pub fn sun_longitude_deg(jd_tt: f64) -> f64 {
    let (true_lon, radius_au) = sun_true_longitude_and_radius(jd_tt);
    let dpsi = nutation_longitude_deg(jd_tt);
    let aberration = -(ABERRATION_ARCSEC / radius_au) / 3600.0;
    normalize_360(true_lon + dpsi + aberration)
}

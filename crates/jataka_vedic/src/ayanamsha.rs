//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (defined by the vernal equinox) and the sidereal zodiac (anchored to
//! fixed stars, Spica at 0 deg Libra). As the equinox precesses westward
//! the ayanamsha increases over time.
//!
//! The value at any epoch is the J2000.0 reference plus the accumulated
//! IAU 2006 general precession in ecliptic longitude.

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0 in degrees.
///
/// Indian government standard (Calendar Reform Committee, 1957):
/// Spica at 0 deg Libra sidereal.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// IAU 2006 general precession in ecliptic longitude, in degrees.
///
/// # Arguments
/// * `t_centuries` — Julian centuries of TT since J2000.0
///
/// # Formula
/// `p_A = 5028.796195 T + 1.1054348 T^2 + 0.00007964 T^3` (arcsec)
pub fn general_precession_longitude_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    (5028.796_195 * t + 1.105_434_8 * t * t + 0.000_079_64 * t * t * t) / 3600.0
}

/// Lahiri ayanamsha in degrees at a given epoch.
///
/// # Arguments
/// * `t_centuries` — Julian centuries of TT since J2000.0
pub fn lahiri_ayanamsha_deg(t_centuries: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_longitude_deg(t_centuries)
}

/// Convert a tropical longitude to sidereal by subtracting the ayanamsha.
///
/// The result is normalized to [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, t_centuries: f64) -> f64 {
    normalize_360(tropical_lon_deg - lahiri_ayanamsha_deg(t_centuries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        assert!((lahiri_ayanamsha_deg(0.0) - LAHIRI_J2000_DEG).abs() < 1e-15);
    }

    #[test]
    fn precession_rate() {
        // ~1.397 deg per century
        let drift = lahiri_ayanamsha_deg(1.0) - lahiri_ayanamsha_deg(0.0);
        assert!((drift - 1.397).abs() < 0.01, "one century drift = {drift}");
    }

    #[test]
    fn decreases_into_the_past() {
        assert!(lahiri_ayanamsha_deg(-1.0) < lahiri_ayanamsha_deg(0.0));
    }

    #[test]
    fn sidereal_conversion_wraps() {
        // A tropical longitude just above the ayanamsha lands near 0 sidereal.
        let ayan = lahiri_ayanamsha_deg(0.0);
        let sid = tropical_to_sidereal(ayan + 0.25, 0.0);
        assert!((sid - 0.25).abs() < 1e-12);

        // Below the ayanamsha it wraps to late Meena.
        let sid = tropical_to_sidereal(ayan - 0.25, 0.0);
        assert!((sid - 359.75).abs() < 1e-12);
    }

    #[test]
    fn value_in_plausible_range_for_modern_era() {
        // Year 2024 (~0.24 centuries): roughly 24.1-24.3 deg.
        let val = lahiri_ayanamsha_deg(0.24);
        assert!((24.0..24.4).contains(&val), "val = {val}");
    }
}

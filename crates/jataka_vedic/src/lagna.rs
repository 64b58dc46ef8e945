//! Ascendant (lagna) and whole-sign house assignment.
//!
//! The ascendant is the ecliptic longitude rising on the eastern horizon
//! for a given instant and place. Houses follow the whole-sign scheme:
//! the sign holding the ascendant is the entire first house and each
//! subsequent sign is the next house.

use jataka_ephem::mean_obliquity_deg;
use jataka_time::{gmst_deg, jd_ut_to_tt, local_sidereal_time_deg};

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// One whole-sign house cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1..=12.
    pub house: u8,
    /// Sign occupying the house.
    pub rashi: Rashi,
    /// Sidereal longitude of the sign boundary that opens the house.
    pub cusp_deg: f64,
}

/// Tropical ascendant longitude in degrees, [0, 360).
///
/// # Arguments
/// * `jd_ut` — Julian Date (UT) of the instant
/// * `latitude_deg` — geographic latitude, north positive
/// * `longitude_deg` — geographic longitude, east positive
///
/// # Formula
/// `asc = atan2(cos RAMC, -(sin RAMC * cos eps + tan phi * sin eps))`
///
/// where RAMC is the local sidereal time expressed in degrees.
pub fn ascendant_tropical_deg(jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> f64 {
    let ramc = local_sidereal_time_deg(gmst_deg(jd_ut), longitude_deg).to_radians();
    let eps = mean_obliquity_deg(jd_ut_to_tt(jd_ut)).to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(ramc.cos(), -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_360(asc.to_degrees())
}

/// Whole-sign house cusps from a sidereal ascendant longitude.
///
/// House 1 is the full sign containing the ascendant; its cusp sits at
/// that sign's boundary, not at the ascendant degree itself.
pub fn whole_sign_houses(sidereal_asc_deg: f64) -> [HouseCusp; 12] {
    let asc_sign = (normalize_360(sidereal_asc_deg) / 30.0).floor() as u8;
    core::array::from_fn(|i| {
        let sign_index = (asc_sign + i as u8) % 12;
        HouseCusp {
            house: i as u8 + 1,
            rashi: Rashi::from_index(sign_index),
            cusp_deg: f64::from(sign_index) * 30.0,
        }
    })
}

/// House (1..=12) occupied by a sidereal longitude, given the ascendant.
pub fn house_of(sidereal_lon_deg: f64, sidereal_asc_deg: f64) -> u8 {
    let asc_sign = (normalize_360(sidereal_asc_deg) / 30.0).floor() as u8;
    let lon_sign = (normalize_360(sidereal_lon_deg) / 30.0).floor() as u8;
    (lon_sign + 12 - asc_sign) % 12 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_in_range() {
        // Sweep a day at a mid-latitude site; result must stay in [0, 360).
        for i in 0..24 {
            let jd = 2_451_545.0 + f64::from(i) / 24.0;
            let asc = ascendant_tropical_deg(jd, 27.7172, 85.3240);
            assert!((0.0..360.0).contains(&asc), "hour {i}: asc = {asc}");
        }
    }

    #[test]
    fn ascendant_advances_through_full_circle_in_a_day() {
        // The ascendant completes one revolution per sidereal day, so
        // samples 2 hours apart should each advance roughly 20-45 deg.
        let mut prev = ascendant_tropical_deg(2_451_545.0, 27.7172, 85.3240);
        for i in 1..=12 {
            let jd = 2_451_545.0 + f64::from(i) / 12.0;
            let asc = ascendant_tropical_deg(jd, 27.7172, 85.3240);
            let step = normalize_360(asc - prev);
            assert!((5.0..80.0).contains(&step), "step {i} = {step}");
            prev = asc;
        }
    }

    #[test]
    fn houses_follow_sign_order() {
        let houses = whole_sign_houses(95.0); // Karka rising
        assert_eq!(houses[0].rashi, Rashi::Karka);
        assert_eq!(houses[0].house, 1);
        assert_eq!(houses[0].cusp_deg, 90.0);
        assert_eq!(houses[11].rashi, Rashi::Mithuna);
        assert_eq!(houses[11].house, 12);
        for w in houses.windows(2) {
            assert_eq!(w[1].rashi.index(), (w[0].rashi.index() + 1) % 12);
        }
    }

    #[test]
    fn house_lookup() {
        // Karka rising: a graha in Karka is house 1, Simha house 2,
        // Mithuna house 12.
        assert_eq!(house_of(100.0, 95.0), 1);
        assert_eq!(house_of(125.0, 95.0), 2);
        assert_eq!(house_of(70.0, 95.0), 12);
    }
}

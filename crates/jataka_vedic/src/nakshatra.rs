//! Nakshatra (lunar mansion) classification.
//!
//! The sidereal ecliptic divides into 27 equal mansions of 13 deg 20 min,
//! starting from Ashwini at 0 deg. Each mansion splits into four padas
//! of 3 deg 20 min used by the divisional charts and the kootas.

use crate::util::normalize_360;

/// Arc length of one nakshatra in degrees (13 deg 20 min).
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Arc length of one pada in degrees (3 deg 20 min).
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatra names starting from Ashwini.
pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// A longitude resolved to its nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// 0-based nakshatra index (0 = Ashwini .. 26 = Revati).
    pub index: u8,
    /// 1-based pada within the nakshatra (1..=4).
    pub pada: u8,
    /// Degrees traversed within the nakshatra, [0, 13.333..).
    pub degrees_traversed: f64,
}

impl NakshatraInfo {
    pub fn name(&self) -> &'static str {
        NAKSHATRA_NAMES[self.index as usize]
    }

    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn fraction_traversed(&self) -> f64 {
        self.degrees_traversed / NAKSHATRA_SPAN
    }
}

/// Nakshatra and pada containing a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon);
    let index = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26) as u8;
    let degrees_traversed = lon - f64::from(index) * NAKSHATRA_SPAN;
    let pada = ((degrees_traversed / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo { index, pada, degrees_traversed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.index, 0);
        assert_eq!(n.pada, 1);

        let n = nakshatra_from_longitude(NAKSHATRA_SPAN);
        assert_eq!(n.index, 1);
        assert_eq!(n.pada, 1);

        let n = nakshatra_from_longitude(359.999);
        assert_eq!(n.index, 26);
        assert_eq!(n.name(), "Revati");
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn pada_progression() {
        // Within Ashwini the four padas split at multiples of 3 deg 20 min.
        assert_eq!(nakshatra_from_longitude(1.0).pada, 1);
        assert_eq!(nakshatra_from_longitude(4.0).pada, 2);
        assert_eq!(nakshatra_from_longitude(7.0).pada, 3);
        assert_eq!(nakshatra_from_longitude(11.0).pada, 4);
    }

    #[test]
    fn traversed_fraction() {
        let n = nakshatra_from_longitude(NAKSHATRA_SPAN * 1.5);
        assert_eq!(n.index, 1);
        assert!((n.fraction_traversed() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn negative_longitude_wraps() {
        let n = nakshatra_from_longitude(-0.5);
        assert_eq!(n.index, 26);
    }
}

//! Varga (divisional chart) calculations.
//!
//! Each varga divides the 30-degree rashi span into N equal parts and
//! maps each part to a target rashi. The six classical vargas handled
//! here (D3, D4, D9, D10, D12, D60) carry their traditional mapping
//! rules; any other divisor falls back to uniform multiplication of the
//! longitude.

use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varga {
    /// Drekkana: siblings and courage.
    D3,
    /// Chaturthamsha: property and fortune.
    D4,
    /// Navamsha: marriage and dharma.
    D9,
    /// Dashamsha: career and status.
    D10,
    /// Dwadashamsha: parents.
    D12,
    /// Shashtyamsha: accumulated karma.
    D60,
    /// Uniform division for any other divisor.
    Uniform(u16),
}

impl Varga {
    /// Number of divisions per rashi.
    pub const fn divisor(self) -> u16 {
        match self {
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D60 => 60,
            Self::Uniform(n) => n,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D60 => "Shashtyamsha",
            Self::Uniform(_) => "Uniform",
        }
    }
}

/// The six classical vargas in divisor order.
pub const CLASSICAL_VARGAS: [Varga; 6] = [
    Varga::D3,
    Varga::D4,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D60,
];

/// Map a sidereal longitude into a varga chart, returning the mapped
/// longitude in [0, 360).
///
/// The part index within the rashi selects the target rashi per the
/// varga's rule; the position within the part scales to a full 30-degree
/// span in the target rashi.
pub fn varga_longitude(varga: Varga, sidereal_lon: f64) -> f64 {
    let lon = normalize_360(sidereal_lon);
    let sign = (lon / 30.0).floor() as u16;
    let deg = lon - f64::from(sign) * 30.0;

    let n = f64::from(varga.divisor().max(1));
    let part_span = 30.0 / n;
    let part = ((deg / part_span).floor() as u16).min(varga.divisor().saturating_sub(1));
    let within = (deg - f64::from(part) * part_span) / part_span * 30.0;

    let target_sign = match varga {
        // Parts go to the sign itself, the 5th, and the 9th from it.
        Varga::D3 => sign + 4 * part,
        // Parts go to the sign itself, the 4th, 7th, and 10th from it.
        Varga::D4 => sign + 3 * part,
        // Counting starts from the cardinal sign of the rashi's element.
        Varga::D9 => {
            let start = [0, 9, 6, 3][(sign % 4) as usize];
            start + part
        }
        // Odd signs count from themselves, even signs from the 9th.
        Varga::D10 => {
            if sign % 2 == 0 {
                sign + part
            } else {
                sign + 8 + part
            }
        }
        // Parts count from the sign itself.
        Varga::D12 => sign + part,
        // Uniform multiplication of the longitude.
        Varga::D60 | Varga::Uniform(_) => {
            return normalize_360(lon * n);
        }
    };

    normalize_360(f64::from(target_sign % 12) * 30.0 + within)
}

/// Varga rashi and degrees within it for a sidereal longitude.
pub fn varga_sign_and_degrees(varga: Varga, sidereal_lon: f64) -> (Rashi, f64) {
    let mapped = varga_longitude(varga, sidereal_lon);
    (rashi_from_longitude(mapped), mapped % 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drekkana_thirds() {
        // Mesha splits into Mesha, Simha, Dhanu.
        assert_eq!(varga_sign_and_degrees(Varga::D3, 5.0).0, Rashi::Mesha);
        assert_eq!(varga_sign_and_degrees(Varga::D3, 15.0).0, Rashi::Simha);
        assert_eq!(varga_sign_and_degrees(Varga::D3, 25.0).0, Rashi::Dhanu);
    }

    #[test]
    fn chaturthamsha_quarters() {
        // Vrishabha quarters land in Vrishabha, Simha, Vrischika, Kumbha.
        let signs: Vec<Rashi> = [31.0, 39.0, 46.0, 53.0]
            .iter()
            .map(|&l| varga_sign_and_degrees(Varga::D4, l).0)
            .collect();
        assert_eq!(
            signs,
            [Rashi::Vrishabha, Rashi::Simha, Rashi::Vrischika, Rashi::Kumbha]
        );
    }

    #[test]
    fn navamsha_element_starts() {
        // First navamsha of each sign starts from the element's cardinal sign.
        assert_eq!(varga_sign_and_degrees(Varga::D9, 0.5).0, Rashi::Mesha);
        assert_eq!(varga_sign_and_degrees(Varga::D9, 30.5).0, Rashi::Makara);
        assert_eq!(varga_sign_and_degrees(Varga::D9, 60.5).0, Rashi::Tula);
        assert_eq!(varga_sign_and_degrees(Varga::D9, 90.5).0, Rashi::Karka);
    }

    #[test]
    fn navamsha_matches_ninefold_formula() {
        // Element-start mapping agrees with sign*9 + part (mod 12).
        for sign in 0..12u16 {
            for part in 0..9u16 {
                let lon = f64::from(sign) * 30.0 + f64::from(part) * (30.0 / 9.0) + 0.1;
                let got = varga_sign_and_degrees(Varga::D9, lon).0;
                let expect = Rashi::from_index(((sign * 9 + part) % 12) as u8);
                assert_eq!(got, expect, "sign {sign} part {part}");
            }
        }
    }

    #[test]
    fn dashamsha_parity_start() {
        // Odd (0-indexed even) Mesha: first part is Mesha itself.
        assert_eq!(varga_sign_and_degrees(Varga::D10, 1.0).0, Rashi::Mesha);
        // Even Vrishabha: first part counts from the 9th sign, Makara.
        assert_eq!(varga_sign_and_degrees(Varga::D10, 31.0).0, Rashi::Makara);
    }

    #[test]
    fn dwadashamsha_counts_from_sign() {
        // Karka's parts cycle Karka, Simha, ...
        assert_eq!(varga_sign_and_degrees(Varga::D12, 91.0).0, Rashi::Karka);
        assert_eq!(varga_sign_and_degrees(Varga::D12, 93.5).0, Rashi::Simha);
    }

    #[test]
    fn shashtyamsha_uniform() {
        // D60 multiplies the longitude by 60.
        let mapped = varga_longitude(Varga::D60, 10.25);
        assert!((mapped - normalize_360(10.25 * 60.0)).abs() < 1e-9);
    }

    #[test]
    fn uniform_fallback() {
        let mapped = varga_longitude(Varga::Uniform(7), 100.0);
        assert!((mapped - normalize_360(700.0)).abs() < 1e-9);
    }

    #[test]
    fn degrees_within_part_scale_to_thirty() {
        // Midway through a navamsha part maps to 15 deg in the target sign.
        let span = 30.0 / 9.0;
        let (_, deg) = varga_sign_and_degrees(Varga::D9, span / 2.0);
        assert!((deg - 15.0).abs() < 1e-9, "deg = {deg}");
    }
}

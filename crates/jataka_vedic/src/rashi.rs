//! Rashi (zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees,
//! starting from Mesha (Aries) at sidereal 0 deg. Lordship, element,
//! and modality follow universal Vedic convention.

use crate::graha::Graha;
use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha .. 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Modality (chara/sthira/dvisvabhava) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

/// Classical element (tatva) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tatva {
    Agni,
    Prithvi,
    Vayu,
    Jala,
}

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi from a 0-based index (mod 12).
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// 1-based sign number used in chart output.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Planetary lord of the rashi.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// Modality: movable for 0,3,6,9; fixed for 1,4,7,10; dual otherwise.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Element: fire/earth/air/water repeating from Mesha.
    pub const fn tatva(self) -> Tatva {
        match self.index() % 4 {
            0 => Tatva::Agni,
            1 => Tatva::Prithvi,
            2 => Tatva::Vayu,
            _ => Tatva::Jala,
        }
    }

    /// Odd (purusha) signs: Mesha, Mithuna, Simha, Tula, Dhanu, Kumbha.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Tatva {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Agni => "Agni",
            Self::Prithvi => "Prithvi",
            Self::Vayu => "Vayu",
            Self::Jala => "Jala",
        }
    }
}

/// Rashi containing a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon);
    Rashi::from_index((lon / 30.0).floor() as u8)
}

/// Degrees traversed within the rashi, [0, 30).
pub fn degrees_in_rashi(sidereal_lon: f64) -> f64 {
    normalize_360(sidereal_lon) % 30.0
}

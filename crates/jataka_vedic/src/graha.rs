//! Vedic planet (graha) enum, lordships, dignities, and friendships.
//!
//! The 9 grahas form the foundation of all jyotish calculations here.
//! Rashi lordship, exaltation/debilitation, and the natural (naisargika)
//! friendship table are universal Vedic conventions (BPHS).

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Relationship between two grahas in the natural friendship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in traditional order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Exaltation rashi. Nodes follow the Taurus/Scorpio convention.
    pub const fn exaltation_rashi(self) -> Rashi {
        match self {
            Self::Surya => Rashi::Mesha,
            Self::Chandra => Rashi::Vrishabha,
            Self::Mangal => Rashi::Makara,
            Self::Buddh => Rashi::Kanya,
            Self::Guru => Rashi::Karka,
            Self::Shukra => Rashi::Meena,
            Self::Shani => Rashi::Tula,
            Self::Rahu => Rashi::Vrishabha,
            Self::Ketu => Rashi::Vrischika,
        }
    }

    /// Debilitation rashi: the 7th from exaltation.
    pub const fn debilitation_rashi(self) -> Rashi {
        Rashi::from_index((self.exaltation_rashi().index() + 6) % 12)
    }

    /// Natural (naisargika) relationship toward another graha.
    ///
    /// The nodes are treated like Saturn's row, a common convention
    /// when a 9-graha table is needed.
    pub fn maitri_toward(self, other: Graha) -> Maitri {
        use Graha::*;
        use Maitri::*;
        if self == other {
            return Friend;
        }
        let row = match self {
            Rahu | Ketu | Shani => Shani,
            g => g,
        };
        let col = match other {
            Rahu | Ketu | Shani => Shani,
            g => g,
        };
        if row == col {
            return Friend;
        }
        match row {
            Surya => match col {
                Chandra | Mangal | Guru => Friend,
                Buddh => Neutral,
                _ => Enemy,
            },
            Chandra => match col {
                Surya | Buddh => Friend,
                _ => Neutral,
            },
            Mangal => match col {
                Surya | Chandra | Guru => Friend,
                Shukra | Shani => Neutral,
                _ => Enemy,
            },
            Buddh => match col {
                Surya | Shukra => Friend,
                Chandra => Enemy,
                _ => Neutral,
            },
            Guru => match col {
                Surya | Chandra | Mangal => Friend,
                Shani => Neutral,
                _ => Enemy,
            },
            Shukra => match col {
                Buddh | Shani => Friend,
                Mangal | Guru => Neutral,
                _ => Enemy,
            },
            Shani => match col {
                Buddh | Shukra => Friend,
                Guru => Neutral,
                _ => Enemy,
            },
            Rahu | Ketu => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn debilitation_opposite_exaltation() {
        for &g in &ALL_GRAHAS {
            let ex = g.exaltation_rashi().index();
            let de = g.debilitation_rashi().index();
            assert_eq!((ex + 6) % 12, de, "{:?}", g);
        }
    }

    #[test]
    fn sun_moon_mutual_friends() {
        assert_eq!(Graha::Surya.maitri_toward(Graha::Chandra), Maitri::Friend);
        assert_eq!(Graha::Chandra.maitri_toward(Graha::Surya), Maitri::Friend);
    }

    #[test]
    fn maitri_is_asymmetric() {
        // Moon regards no one as enemy, but Mercury regards Moon as enemy.
        assert_eq!(Graha::Chandra.maitri_toward(Graha::Buddh), Maitri::Friend);
        assert_eq!(Graha::Buddh.maitri_toward(Graha::Chandra), Maitri::Enemy);
    }

    #[test]
    fn nodes_follow_saturn_row() {
        assert_eq!(Graha::Rahu.maitri_toward(Graha::Shukra), Maitri::Friend);
        assert_eq!(Graha::Ketu.maitri_toward(Graha::Surya), Maitri::Enemy);
    }
}

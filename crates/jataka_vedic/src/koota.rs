//! Ashtakoota (eight-factor) marriage matching.
//!
//! All eight factors derive from the two Moon positions: rashi-based
//! (varna, vasya, graha maitri, bhakoot) and nakshatra-based (tara,
//! yoni, gana, nadi). Scores total 36; Nadi carries the largest weight
//! and a Nadi failure caps the verdict regardless of the total.

use crate::graha::{Graha, Maitri};
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::{Rashi, Tatva, rashi_from_longitude};

/// Maximum obtainable total across the eight kootas.
pub const ASHTAKOOTA_MAX: f64 = 36.0;

/// One koota factor's outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KootaScore {
    pub name: &'static str,
    pub obtained: f64,
    pub maximum: f64,
}

/// Overall verdict tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchGrade {
    /// 28 or above.
    Excellent,
    /// 24 to below 28.
    Good,
    /// 18 to below 24.
    Average,
    /// Below 18, or any total with a Nadi failure.
    Poor,
}

impl MatchGrade {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }
}

/// Full eight-factor matching result (Guna Milan).
#[derive(Debug, Clone, PartialEq)]
pub struct GunaMilan {
    /// Varna, Vasya, Tara, Yoni, Graha Maitri, Gana, Bhakoot, Nadi.
    pub scores: [KootaScore; 8],
    pub total: f64,
    pub grade: MatchGrade,
}

// ---------------------------------------------------------------------------
// Varna
// ---------------------------------------------------------------------------

/// Varna rank by Moon-sign element: water 3, fire 2, earth 1, air 0.
fn varna_rank(sign: Rashi) -> u8 {
    match sign.tatva() {
        Tatva::Jala => 3,
        Tatva::Agni => 2,
        Tatva::Prithvi => 1,
        Tatva::Vayu => 0,
    }
}

/// Varna koota (max 1): full score when the groom's varna is not below
/// the bride's.
pub fn varna_koota(groom_sign: Rashi, bride_sign: Rashi) -> f64 {
    if varna_rank(groom_sign) >= varna_rank(bride_sign) {
        1.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Vasya
// ---------------------------------------------------------------------------

/// Signs under each sign's control, by 0-based index.
const VASYA_OF: [&[u8]; 12] = [
    &[4, 7],  // Mesha: Simha, Vrischika
    &[3, 6],  // Vrishabha: Karka, Tula
    &[5],     // Mithuna: Kanya
    &[7, 8],  // Karka: Vrischika, Dhanu
    &[6],     // Simha: Tula
    &[2, 11], // Kanya: Mithuna, Meena
    &[5, 9],  // Tula: Kanya, Makara
    &[3],     // Vrischika: Karka
    &[11],    // Dhanu: Meena
    &[0, 10], // Makara: Mesha, Kumbha
    &[0],     // Kumbha: Mesha
    &[9],     // Meena: Makara
];

fn controls(a: Rashi, b: Rashi) -> bool {
    VASYA_OF[a.index() as usize].contains(&b.index())
}

/// Vasya koota (max 2): 2 for the same sign or mutual control, 1 when
/// the groom's sign controls the bride's, 0.5 for the reverse, else 0.
pub fn vasya_koota(groom_sign: Rashi, bride_sign: Rashi) -> f64 {
    let g = controls(groom_sign, bride_sign);
    let b = controls(bride_sign, groom_sign);
    if groom_sign == bride_sign || (g && b) {
        2.0
    } else if g {
        1.0
    } else if b {
        0.5
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tara
// ---------------------------------------------------------------------------

/// Inclusive nakshatra count from `from` to `to`, reduced mod 9.
fn tara_count(from: u8, to: u8) -> u8 {
    ((to + 27 - from) % 27 + 1) % 9
}

/// Whether a reduced tara count is inauspicious (Vipat, Pratyari, Vadha).
fn tara_bad(count: u8) -> bool {
    matches!(count, 3 | 5 | 7)
}

/// Tara koota (max 3): 1.5 per auspicious counting direction.
pub fn tara_koota(groom_nak: u8, bride_nak: u8) -> f64 {
    let mut score = 0.0;
    if !tara_bad(tara_count(bride_nak, groom_nak)) {
        score += 1.5;
    }
    if !tara_bad(tara_count(groom_nak, bride_nak)) {
        score += 1.5;
    }
    score
}

// ---------------------------------------------------------------------------
// Yoni
// ---------------------------------------------------------------------------

/// The fourteen yoni animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Sheep => "Sheep",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
        }
    }
}

/// Yoni animal per nakshatra.
const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Horse,    // Ashwini
    Yoni::Elephant, // Bharani
    Yoni::Sheep,    // Krittika
    Yoni::Serpent,  // Rohini
    Yoni::Serpent,  // Mrigashira
    Yoni::Dog,      // Ardra
    Yoni::Cat,      // Punarvasu
    Yoni::Sheep,    // Pushya
    Yoni::Cat,      // Ashlesha
    Yoni::Rat,      // Magha
    Yoni::Rat,      // Purva Phalguni
    Yoni::Cow,      // Uttara Phalguni
    Yoni::Buffalo,  // Hasta
    Yoni::Tiger,    // Chitra
    Yoni::Buffalo,  // Swati
    Yoni::Tiger,    // Vishakha
    Yoni::Deer,     // Anuradha
    Yoni::Deer,     // Jyeshtha
    Yoni::Dog,      // Mula
    Yoni::Monkey,   // Purva Ashadha
    Yoni::Mongoose, // Uttara Ashadha
    Yoni::Monkey,   // Shravana
    Yoni::Lion,     // Dhanishta
    Yoni::Horse,    // Shatabhisha
    Yoni::Lion,     // Purva Bhadrapada
    Yoni::Cow,      // Uttara Bhadrapada
    Yoni::Elephant, // Revati
];

/// Symmetric yoni compatibility, rows and columns in `Yoni` order.
/// 4 on the diagonal (same animal), 0 for sworn enemies.
const YONI_MATRIX: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1], // Horse
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0], // Elephant
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1], // Sheep
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2], // Serpent
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1], // Dog
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1], // Cat
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2], // Rat
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1], // Cow
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1], // Buffalo
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1], // Tiger
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1], // Deer
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2], // Monkey
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2], // Mongoose
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4], // Lion
];

/// Yoni koota (max 4) from the two birth nakshatras.
pub fn yoni_koota(groom_nak: u8, bride_nak: u8) -> f64 {
    let g = NAKSHATRA_YONI[(groom_nak % 27) as usize] as usize;
    let b = NAKSHATRA_YONI[(bride_nak % 27) as usize] as usize;
    f64::from(YONI_MATRIX[g][b])
}

// ---------------------------------------------------------------------------
// Graha maitri
// ---------------------------------------------------------------------------

/// Graha maitri koota (max 5) from the mutual friendship of the two
/// Moon-sign lords: friends both ways 5, friend and neutral 4, neutral
/// both ways 3, any enmity 0.5. Identical lords count as friends.
pub fn maitri_koota(groom_sign: Rashi, bride_sign: Rashi) -> f64 {
    let g_lord = groom_sign.lord();
    let b_lord = bride_sign.lord();
    if g_lord == b_lord {
        return 5.0;
    }
    let ab = g_lord.maitri_toward(b_lord);
    let ba = b_lord.maitri_toward(g_lord);
    match (ab, ba) {
        (Maitri::Friend, Maitri::Friend) => 5.0,
        (Maitri::Friend, Maitri::Neutral) | (Maitri::Neutral, Maitri::Friend) => 4.0,
        (Maitri::Neutral, Maitri::Neutral) => 3.0,
        _ => 0.5,
    }
}

// ---------------------------------------------------------------------------
// Gana
// ---------------------------------------------------------------------------

/// Temperament classes of the nakshatras.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Gana per nakshatra.
const NAKSHATRA_GANA: [Gana; 27] = [
    Gana::Deva,     // Ashwini
    Gana::Manushya, // Bharani
    Gana::Rakshasa, // Krittika
    Gana::Manushya, // Rohini
    Gana::Deva,     // Mrigashira
    Gana::Manushya, // Ardra
    Gana::Deva,     // Punarvasu
    Gana::Deva,     // Pushya
    Gana::Rakshasa, // Ashlesha
    Gana::Rakshasa, // Magha
    Gana::Manushya, // Purva Phalguni
    Gana::Manushya, // Uttara Phalguni
    Gana::Deva,     // Hasta
    Gana::Rakshasa, // Chitra
    Gana::Deva,     // Swati
    Gana::Rakshasa, // Vishakha
    Gana::Deva,     // Anuradha
    Gana::Rakshasa, // Jyeshtha
    Gana::Rakshasa, // Mula
    Gana::Manushya, // Purva Ashadha
    Gana::Manushya, // Uttara Ashadha
    Gana::Deva,     // Shravana
    Gana::Rakshasa, // Dhanishta
    Gana::Rakshasa, // Shatabhisha
    Gana::Manushya, // Purva Bhadrapada
    Gana::Manushya, // Uttara Bhadrapada
    Gana::Deva,     // Revati
];

/// Gana koota (max 6): same gana or the deva-manushya pairing score 6,
/// deva-rakshasa 1, manushya-rakshasa 0.
pub fn gana_koota(groom_nak: u8, bride_nak: u8) -> f64 {
    let g = NAKSHATRA_GANA[(groom_nak % 27) as usize];
    let b = NAKSHATRA_GANA[(bride_nak % 27) as usize];
    match (g, b) {
        _ if g == b => 6.0,
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva) => 6.0,
        (Gana::Deva, Gana::Rakshasa) | (Gana::Rakshasa, Gana::Deva) => 1.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Bhakoot
// ---------------------------------------------------------------------------

/// Bhakoot koota (max 7): the 2/12, 5/9, and 6/8 sign placements score
/// 0; everything else scores full.
pub fn bhakoot_koota(groom_sign: Rashi, bride_sign: Rashi) -> f64 {
    // Inclusive count from groom's sign to bride's, 1..=12.
    let d = (bride_sign.index() + 12 - groom_sign.index()) % 12 + 1;
    match d {
        2 | 12 | 5 | 9 | 6 | 8 => 0.0,
        _ => 7.0,
    }
}

// ---------------------------------------------------------------------------
// Nadi
// ---------------------------------------------------------------------------

/// The three nadis in the repeating 1-2-3-3-2-1 nakshatra pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adi => "Adi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

/// Nadi of a nakshatra.
pub fn nakshatra_nadi(nak_index: u8) -> Nadi {
    match nak_index % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

/// Nadi koota (max 8): different nadis score full, the same nadi zero.
pub fn nadi_koota(groom_nak: u8, bride_nak: u8) -> f64 {
    if nakshatra_nadi(groom_nak) == nakshatra_nadi(bride_nak) {
        0.0
    } else {
        8.0
    }
}

// ---------------------------------------------------------------------------
// Aggregate
// ---------------------------------------------------------------------------

/// Full eight-factor matching from the two sidereal Moon longitudes.
pub fn guna_milan(groom_moon_sidereal: f64, bride_moon_sidereal: f64) -> GunaMilan {
    let g_sign = rashi_from_longitude(groom_moon_sidereal);
    let b_sign = rashi_from_longitude(bride_moon_sidereal);
    let g_nak = nakshatra_from_longitude(groom_moon_sidereal).index;
    let b_nak = nakshatra_from_longitude(bride_moon_sidereal).index;

    let nadi = nadi_koota(g_nak, b_nak);
    let scores = [
        KootaScore { name: "Varna", obtained: varna_koota(g_sign, b_sign), maximum: 1.0 },
        KootaScore { name: "Vasya", obtained: vasya_koota(g_sign, b_sign), maximum: 2.0 },
        KootaScore { name: "Tara", obtained: tara_koota(g_nak, b_nak), maximum: 3.0 },
        KootaScore { name: "Yoni", obtained: yoni_koota(g_nak, b_nak), maximum: 4.0 },
        KootaScore {
            name: "Graha Maitri",
            obtained: maitri_koota(g_sign, b_sign),
            maximum: 5.0,
        },
        KootaScore { name: "Gana", obtained: gana_koota(g_nak, b_nak), maximum: 6.0 },
        KootaScore {
            name: "Bhakoot",
            obtained: bhakoot_koota(g_sign, b_sign),
            maximum: 7.0,
        },
        KootaScore { name: "Nadi", obtained: nadi, maximum: 8.0 },
    ];

    let raw: f64 = scores.iter().map(|s| s.obtained).sum();
    let total = (raw * 2.0).round() / 2.0;

    let mut grade = if total >= 28.0 {
        MatchGrade::Excellent
    } else if total >= 24.0 {
        MatchGrade::Good
    } else if total >= 18.0 {
        MatchGrade::Average
    } else {
        MatchGrade::Poor
    };
    // Nadi dosha overrides the numeric tier.
    if nadi == 0.0 && grade != MatchGrade::Poor {
        grade = MatchGrade::Average;
    }

    GunaMilan { scores, total, grade }
}

/// Total Guna Milan score out of 36.
pub fn ashtakoota_score(groom_moon_sidereal: f64, bride_moon_sidereal: f64) -> f64 {
    guna_milan(groom_moon_sidereal, bride_moon_sidereal).total
}

// ---------------------------------------------------------------------------
// Per-chart profile
// ---------------------------------------------------------------------------

/// Varna (social class) attributed to a Moon sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Varna {
    Brahmin,
    Kshatriya,
    Vaishya,
    Shudra,
}

impl Varna {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brahmin => "Brahmin",
            Self::Kshatriya => "Kshatriya",
            Self::Vaishya => "Vaishya",
            Self::Shudra => "Shudra",
        }
    }
}

/// Varna of a Moon sign: water Brahmin, fire Kshatriya, earth Vaishya,
/// air Shudra.
pub fn sign_varna(sign: Rashi) -> Varna {
    match sign.tatva() {
        Tatva::Jala => Varna::Brahmin,
        Tatva::Agni => Varna::Kshatriya,
        Tatva::Prithvi => Varna::Vaishya,
        Tatva::Vayu => Varna::Shudra,
    }
}

/// Vasya (habitat) class of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vasya {
    /// Quadruped signs.
    Chatushpada,
    /// Human signs.
    Manava,
    /// Water signs.
    Jalachara,
    /// Wild signs.
    Vanachara,
    /// Insect signs.
    Keeta,
}

impl Vasya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chatushpada => "Chatushpada",
            Self::Manava => "Manava",
            Self::Jalachara => "Jalachara",
            Self::Vanachara => "Vanachara",
            Self::Keeta => "Keeta",
        }
    }
}

/// Vasya class of a sign.
pub fn sign_vasya(sign: Rashi) -> Vasya {
    match sign {
        Rashi::Mesha | Rashi::Vrishabha | Rashi::Dhanu => Vasya::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Kumbha => Vasya::Manava,
        Rashi::Karka | Rashi::Makara | Rashi::Meena => Vasya::Jalachara,
        Rashi::Simha => Vasya::Vanachara,
        Rashi::Vrischika => Vasya::Keeta,
    }
}

/// Paya (metal) attributed to a birth nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paya {
    Svarna,
    Rajat,
    Tamra,
    Loha,
}

impl Paya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Svarna => "Svarna",
            Self::Rajat => "Rajat",
            Self::Tamra => "Tamra",
            Self::Loha => "Loha",
        }
    }
}

/// Paya from the birth nakshatra.
pub fn nakshatra_paya(nak_index: u8) -> Paya {
    match nak_index % 4 {
        0 => Paya::Svarna,
        1 => Paya::Rajat,
        2 => Paya::Tamra,
        _ => Paya::Loha,
    }
}

/// Matching attributes of a single chart, from the Moon and ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AshtaKootaProfile {
    pub varna: Varna,
    pub vasya: Vasya,
    pub yoni: Yoni,
    pub gana: Gana,
    pub nadi: Nadi,
    pub tatva: Tatva,
    pub paya: Paya,
    /// Lord of the Moon sign.
    pub rashi_lord: Graha,
    /// Lord of the ascendant sign.
    pub lagnesh: Graha,
}

/// Per-chart matching profile from the sidereal Moon and ascendant
/// longitudes.
pub fn ashtakoota_profile(
    moon_sidereal_lon: f64,
    asc_sidereal_lon: f64,
) -> AshtaKootaProfile {
    let moon_sign = rashi_from_longitude(moon_sidereal_lon);
    let asc_sign = rashi_from_longitude(asc_sidereal_lon);
    let nak = nakshatra_from_longitude(moon_sidereal_lon).index;
    AshtaKootaProfile {
        varna: sign_varna(moon_sign),
        vasya: sign_vasya(moon_sign),
        yoni: NAKSHATRA_YONI[(nak % 27) as usize],
        gana: NAKSHATRA_GANA[(nak % 27) as usize],
        nadi: nakshatra_nadi(nak),
        tatva: moon_sign.tatva(),
        paya: nakshatra_paya(nak),
        rashi_lord: moon_sign.lord(),
        lagnesh: asc_sign.lord(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxima_total_36() {
        let p = guna_milan(10.0, 100.0);
        let max: f64 = p.scores.iter().map(|s| s.maximum).sum();
        assert!((max - ASHTAKOOTA_MAX).abs() < 1e-12);
        for s in &p.scores {
            assert!(s.obtained >= 0.0 && s.obtained <= s.maximum, "{}", s.name);
        }
    }

    #[test]
    fn yoni_matrix_symmetric() {
        for i in 0..14 {
            for j in 0..14 {
                assert_eq!(YONI_MATRIX[i][j], YONI_MATRIX[j][i], "({i},{j})");
            }
            assert_eq!(YONI_MATRIX[i][i], 4);
        }
    }

    #[test]
    fn identical_moons() {
        // Same longitude: same nakshatra, so Nadi fails and Gana is
        // full; the verdict is capped despite the high total.
        let p = guna_milan(27.0, 27.0);
        assert_eq!(p.scores[7].obtained, 0.0); // Nadi
        assert_eq!(p.scores[5].obtained, 6.0); // Gana
        assert_eq!(p.scores[3].obtained, 4.0); // Yoni, same animal
        assert!(p.grade == MatchGrade::Average || p.grade == MatchGrade::Poor);
    }

    #[test]
    fn nadi_pattern() {
        assert_eq!(nakshatra_nadi(0), Nadi::Adi);
        assert_eq!(nakshatra_nadi(1), Nadi::Madhya);
        assert_eq!(nakshatra_nadi(2), Nadi::Antya);
        assert_eq!(nakshatra_nadi(3), Nadi::Antya);
        assert_eq!(nakshatra_nadi(4), Nadi::Madhya);
        assert_eq!(nakshatra_nadi(5), Nadi::Adi);
        assert_eq!(nakshatra_nadi(6), Nadi::Adi);
    }

    #[test]
    fn bhakoot_doshas() {
        // 6/8 placement: Mesha and Kanya.
        assert_eq!(bhakoot_koota(Rashi::Mesha, Rashi::Kanya), 0.0);
        // 2/12: Mesha and Vrishabha.
        assert_eq!(bhakoot_koota(Rashi::Mesha, Rashi::Vrishabha), 0.0);
        // 1/7: Mesha and Tula scores full.
        assert_eq!(bhakoot_koota(Rashi::Mesha, Rashi::Tula), 7.0);
        // Same sign scores full.
        assert_eq!(bhakoot_koota(Rashi::Simha, Rashi::Simha), 7.0);
    }

    #[test]
    fn tara_directions() {
        // Same nakshatra: count 1 both ways, auspicious.
        assert_eq!(tara_koota(0, 0), 3.0);
        // Counts of 3 (Vipat) are inauspicious.
        assert!(tara_bad(tara_count(0, 2)));
    }

    #[test]
    fn varna_orders() {
        // Water-sign groom over air-sign bride: full point.
        assert_eq!(varna_koota(Rashi::Karka, Rashi::Mithuna), 1.0);
        // Air-sign groom under water-sign bride: zero.
        assert_eq!(varna_koota(Rashi::Mithuna, Rashi::Karka), 0.0);
        // Equal varnas: full point.
        assert_eq!(varna_koota(Rashi::Mesha, Rashi::Simha), 1.0);
    }

    #[test]
    fn vasya_relations() {
        // Mesha controls Simha.
        assert_eq!(vasya_koota(Rashi::Mesha, Rashi::Simha), 1.0);
        // Reverse direction scores half.
        assert_eq!(vasya_koota(Rashi::Simha, Rashi::Mesha), 0.5);
        // Same sign scores full.
        assert_eq!(vasya_koota(Rashi::Tula, Rashi::Tula), 2.0);
        // Unrelated signs score zero.
        assert_eq!(vasya_koota(Rashi::Mesha, Rashi::Mithuna), 0.0);
    }

    #[test]
    fn gana_pairings() {
        // Ashwini (Deva) with Bharani (Manushya): full.
        assert_eq!(gana_koota(0, 1), 6.0);
        // Ashwini (Deva) with Krittika (Rakshasa): 1.
        assert_eq!(gana_koota(0, 2), 1.0);
        // Bharani (Manushya) with Krittika (Rakshasa): 0.
        assert_eq!(gana_koota(1, 2), 0.0);
    }

    #[test]
    fn maitri_same_lord() {
        // Mesha and Vrischika share Mangal.
        assert_eq!(maitri_koota(Rashi::Mesha, Rashi::Vrischika), 5.0);
    }

    #[test]
    fn per_chart_profile() {
        // Moon at 10 deg (Mesha, Ashwini pada 4), ascendant in Karka.
        let p = ashtakoota_profile(10.0, 95.0);
        assert_eq!(p.varna, Varna::Kshatriya);
        assert_eq!(p.vasya, Vasya::Chatushpada);
        assert_eq!(p.yoni, Yoni::Horse);
        assert_eq!(p.gana, Gana::Deva);
        assert_eq!(p.nadi, Nadi::Adi);
        assert_eq!(p.tatva, Tatva::Agni);
        assert_eq!(p.paya, Paya::Svarna);
        assert_eq!(p.rashi_lord, Graha::Mangal);
        assert_eq!(p.lagnesh, Graha::Chandra);
    }

    #[test]
    fn total_is_half_point_granular() {
        for (g, b) in [(10.0, 100.0), (45.0, 200.0), (300.0, 12.0)] {
            let total = ashtakoota_score(g, b);
            assert!((total * 2.0 - (total * 2.0).round()).abs() < 1e-9);
            assert!((0.0..=ASHTAKOOTA_MAX).contains(&total));
        }
    }
}

//! Panchang elements: tithi, nakshatra, yoga, and karana with their
//! start and end instants.
//!
//! Each element is a classification of a slowly increasing angle built
//! from the Sun and Moon longitudes. Boundary instants are located with
//! a damped Newton iteration on that angle.

use jataka_ephem::{moon_longitude_deg, sun_longitude_deg};
use jataka_time::{jd_tt_to_centuries, jd_ut_to_tt};

use crate::ayanamsha::tropical_to_sidereal;
use crate::nakshatra::{NAKSHATRA_NAMES, NAKSHATRA_SPAN};
use crate::util::{normalize_360, wrap_pm180};

/// Maximum Newton iterations when refining a boundary instant.
const MAX_NEWTON_ITERS: usize = 5;

/// Convergence tolerance on the angle residual, in degrees.
const ANGLE_TOLERANCE_DEG: f64 = 1e-4;

/// Step used for the local angle-rate estimate, in days.
const RATE_STEP_DAYS: f64 = 1e-3;

/// The four angle-based panchang elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Lunar day: 12-degree steps of (Moon − Sun).
    Tithi,
    /// Moon's mansion: 13 deg 20 min steps of the sidereal Moon.
    Nakshatra,
    /// Luni-solar yoga: 13 deg 20 min steps of (Moon + Sun).
    Yoga,
    /// Half-tithi: 6-degree steps of (Moon − Sun).
    Karana,
}

impl ElementKind {
    /// Arc length of one element in degrees.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => 12.0,
            Self::Nakshatra | Self::Yoga => NAKSHATRA_SPAN,
            Self::Karana => 6.0,
        }
    }

    /// Number of elements in one full cycle.
    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => 30,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => 60,
        }
    }
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paksha {
    /// Waxing fortnight, new moon to full moon.
    Shukla,
    /// Waning fortnight, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 15 tithi names within a paksha (15th differs by paksha).
const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// The 27 yoga names starting from Vishkambha.
const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 7 repeating (movable) karana names.
const MOVABLE_KARANAS: [&str; 7] = [
    "Bava",
    "Balava",
    "Kaulava",
    "Taitila",
    "Gara",
    "Vanij",
    "Vishti",
];

/// Tithi name for a 0-based index (0..30).
///
/// Index 14 is Purnima and 29 is Amavasya; the rest repeat the ordinal
/// names per paksha.
pub fn tithi_name(index: u8) -> &'static str {
    match index {
        29 => "Amavasya",
        i => TITHI_NAMES[(i % 15) as usize],
    }
}

/// Paksha for a 0-based tithi index.
pub const fn tithi_paksha(index: u8) -> Paksha {
    if index < 15 { Paksha::Shukla } else { Paksha::Krishna }
}

/// Yoga name for a 0-based index (0..27).
pub fn yoga_name(index: u8) -> &'static str {
    YOGA_NAMES[(index % 27) as usize]
}

/// Karana name for a 0-based sequence index within the synodic month
/// (0..60).
///
/// The cycle opens with fixed Kimstughna, runs the seven movable
/// karanas eight times (indices 1..=56), and closes with the three
/// remaining fixed karanas.
pub fn karana_name(index: u8) -> &'static str {
    match index {
        0 => "Kimstughna",
        57 => "Shakuni",
        58 => "Chatushpada",
        59 => "Naga",
        i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
    }
}

/// One panchang element with its boundary instants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedElement {
    pub kind: ElementKind,
    /// 0-based element index within the cycle.
    pub index: u8,
    /// Julian Date (UT) when the element began, if the root-finder
    /// converged.
    pub start_jd_ut: Option<f64>,
    /// Julian Date (UT) when the element ends.
    pub end_jd_ut: Option<f64>,
}

impl TimedElement {
    pub fn name(&self) -> &'static str {
        match self.kind {
            ElementKind::Tithi => tithi_name(self.index),
            ElementKind::Nakshatra => NAKSHATRA_NAMES[(self.index % 27) as usize],
            ElementKind::Yoga => yoga_name(self.index),
            ElementKind::Karana => karana_name(self.index),
        }
    }
}

/// Sidereal Sun longitude at a UT instant.
fn sun_sidereal_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    tropical_to_sidereal(sun_longitude_deg(jd_tt), jd_tt_to_centuries(jd_tt))
}

/// Sidereal Moon longitude at a UT instant.
fn moon_sidereal_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    tropical_to_sidereal(moon_longitude_deg(jd_tt), jd_tt_to_centuries(jd_tt))
}

/// The classifying angle for an element kind, [0, 360).
///
/// The ayanamsha cancels in the Sun-Moon difference, so tithi and
/// karana are ayanamsha-independent; nakshatra and yoga are not.
pub fn element_angle_deg(kind: ElementKind, jd_ut: f64) -> f64 {
    match kind {
        ElementKind::Tithi | ElementKind::Karana => {
            normalize_360(moon_sidereal_deg(jd_ut) - sun_sidereal_deg(jd_ut))
        }
        ElementKind::Nakshatra => moon_sidereal_deg(jd_ut),
        ElementKind::Yoga => {
            normalize_360(moon_sidereal_deg(jd_ut) + sun_sidereal_deg(jd_ut))
        }
    }
}

/// Local rate of the classifying angle in degrees/day.
fn element_angle_rate(kind: ElementKind, jd_ut: f64) -> f64 {
    let a0 = element_angle_deg(kind, jd_ut);
    let a1 = element_angle_deg(kind, jd_ut + RATE_STEP_DAYS);
    wrap_pm180(a1 - a0) / RATE_STEP_DAYS
}

/// Instant (JD, UT) when the classifying angle crosses `target_deg`.
///
/// Newton iteration seeded at `jd_guess_ut`, at most 5 steps, stopping
/// when the wrapped residual drops below 1e-4 deg. Returns `None` if
/// the iteration fails to converge or the angle rate degenerates.
pub fn find_boundary_crossing(
    kind: ElementKind,
    target_deg: f64,
    jd_guess_ut: f64,
) -> Option<f64> {
    let mut jd = jd_guess_ut;
    for _ in 0..MAX_NEWTON_ITERS {
        let err = wrap_pm180(element_angle_deg(kind, jd) - target_deg);
        if err.abs() < ANGLE_TOLERANCE_DEG {
            return Some(jd);
        }
        let rate = element_angle_rate(kind, jd);
        if rate.abs() < 1e-6 {
            return None;
        }
        jd -= err / rate;
    }
    let err = wrap_pm180(element_angle_deg(kind, jd) - target_deg);
    if err.abs() < ANGLE_TOLERANCE_DEG { Some(jd) } else { None }
}

/// The element in effect at a UT instant, with refined start and end.
pub fn element_at(kind: ElementKind, jd_ut: f64) -> TimedElement {
    let span = kind.span_deg();
    let angle = element_angle_deg(kind, jd_ut);
    let index = ((angle / span).floor() as u8).min(kind.count() - 1);

    let rate = element_angle_rate(kind, jd_ut);
    let start_target = f64::from(index) * span;
    let end_target = normalize_360(start_target + span);

    // Seed each boundary with the linear extrapolation from here.
    let (start, end) = if rate.abs() < 1e-6 {
        (None, None)
    } else {
        let into = angle - start_target;
        let start_guess = jd_ut - into / rate;
        let end_guess = jd_ut + (span - into) / rate;
        (
            find_boundary_crossing(kind, start_target, start_guess),
            find_boundary_crossing(kind, end_target, end_guess),
        )
    };

    TimedElement { kind, index, start_jd_ut: start, end_jd_ut: end }
}

/// All elements of one kind overlapping a UT window.
///
/// Walks forward from the element in effect at `jd_start_ut` until an
/// element begins after `jd_end_ut`.
pub fn elements_for_day(
    kind: ElementKind,
    jd_start_ut: f64,
    jd_end_ut: f64,
) -> Vec<TimedElement> {
    let mut out = Vec::new();
    let mut current = element_at(kind, jd_start_ut);
    // A karana lasts ~0.5 day; 8 entries cover any civil day with margin.
    for _ in 0..8 {
        let end = current.end_jd_ut;
        out.push(current);
        match end {
            Some(e) if e < jd_end_ut => {
                let mut next = element_at(kind, e + 2.0 * ANGLE_TOLERANCE_DEG);
                // The two refinements of one boundary can land a
                // fraction of a millisecond apart; carry the refined
                // end forward so the list stays exactly contiguous.
                next.start_jd_ut = Some(e);
                current = next;
            }
            _ => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2000-01-21 was a full moon; the tithi there must be Purnima.
    const FULL_MOON_JD: f64 = 2_451_564.7;

    #[test]
    fn tithi_at_full_moon() {
        let t = element_at(ElementKind::Tithi, FULL_MOON_JD);
        assert!(t.index == 14 || t.index == 15, "index = {}", t.index);
    }

    #[test]
    fn tithi_boundaries_bracket_instant() {
        let t = element_at(ElementKind::Tithi, 2_451_545.0);
        let start = t.start_jd_ut.expect("start");
        let end = t.end_jd_ut.expect("end");
        assert!(start < 2_451_545.0 && 2_451_545.0 < end);
        // A tithi lasts roughly 0.9-1.1 days.
        assert!((0.7..1.4).contains(&(end - start)), "len = {}", end - start);
    }

    #[test]
    fn nakshatra_duration_plausible() {
        let n = element_at(ElementKind::Nakshatra, 2_451_545.0);
        let len = n.end_jd_ut.unwrap() - n.start_jd_ut.unwrap();
        // Moon covers 13 deg 20 min in roughly one day.
        assert!((0.8..1.3).contains(&len), "len = {len}");
    }

    #[test]
    fn karana_is_half_tithi() {
        let jd = 2_451_550.25;
        let t = element_at(ElementKind::Tithi, jd);
        let k = element_at(ElementKind::Karana, jd);
        let t_len = t.end_jd_ut.unwrap() - t.start_jd_ut.unwrap();
        let k_len = k.end_jd_ut.unwrap() - k.start_jd_ut.unwrap();
        assert!((k_len - t_len / 2.0).abs() < 0.1, "t = {t_len}, k = {k_len}");
    }

    #[test]
    fn day_scan_contiguous() {
        let start = 2_451_545.0;
        let list = elements_for_day(ElementKind::Karana, start, start + 1.0);
        assert!(list.len() >= 2, "got {} karanas", list.len());
        for w in list.windows(2) {
            // Each element starts exactly where the previous one ends.
            assert_eq!(w[1].start_jd_ut.unwrap(), w[0].end_jd_ut.unwrap());
            assert_eq!(w[1].index, (w[0].index + 1) % 60);
        }
    }

    #[test]
    fn tithi_scan_has_no_seams() {
        let start = 2_451_544.5;
        let list = elements_for_day(ElementKind::Tithi, start, start + 3.0);
        assert!(list.len() >= 3, "got {} tithis", list.len());
        for w in list.windows(2) {
            assert_eq!(w[1].start_jd_ut.unwrap(), w[0].end_jd_ut.unwrap());
        }
    }

    #[test]
    fn karana_names_cycle() {
        assert_eq!(karana_name(0), "Kimstughna");
        assert_eq!(karana_name(1), "Bava");
        assert_eq!(karana_name(7), "Vishti");
        assert_eq!(karana_name(8), "Bava");
        assert_eq!(karana_name(56), "Vishti");
        assert_eq!(karana_name(57), "Shakuni");
        assert_eq!(karana_name(59), "Naga");
    }

    #[test]
    fn tithi_names_and_paksha() {
        assert_eq!(tithi_name(0), "Pratipada");
        assert_eq!(tithi_name(14), "Purnima");
        assert_eq!(tithi_name(15), "Pratipada");
        assert_eq!(tithi_name(29), "Amavasya");
        assert_eq!(tithi_paksha(0), Paksha::Shukla);
        assert_eq!(tithi_paksha(29), Paksha::Krishna);
    }

    #[test]
    fn yoga_angle_in_range() {
        for i in 0..10 {
            let jd = 2_451_545.0 + f64::from(i) * 3.7;
            let a = element_angle_deg(ElementKind::Yoga, jd);
            assert!((0.0..360.0).contains(&a));
        }
    }
}

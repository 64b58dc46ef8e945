//! Chara (Jaimini) dasha: rashi periods of variable length.
//!
//! A sign's period is the count from the sign to its lord's occupied
//! sign, minus one, in years; a zero count means the lord sits in its
//! own sign and the period becomes 12 years. Savya signs (Mesha through
//! Mithuna and Tula through Dhanu) count forward, the rest reverse.
//! An exalted lord adds a year, a debilitated one removes a year.

use crate::dasha::types::{DAYS_PER_YEAR, DashaLord, DashaPeriod, DashaSpan};
use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Savya (direct-counting) signs by 0-based index.
const SAVYA_SIGNS: [u8; 6] = [0, 1, 2, 6, 7, 8];

fn is_savya(sign_index: u8) -> bool {
    SAVYA_SIGNS.contains(&(sign_index % 12))
}

/// Inclusive sign count from `from` to `to` in the sign's own direction.
fn sign_count(from: u8, to: u8) -> u8 {
    if is_savya(from) {
        (to + 12 - from) % 12 + 1
    } else {
        (from + 12 - to) % 12 + 1
    }
}

/// Chara period length in years for one sign, given the lord's placement.
///
/// Returns `None` when the sign's lord is absent from `positions`.
fn period_years(sign: Rashi, positions: &[(Graha, f64)]) -> Option<f64> {
    let lord = sign.lord();
    let lord_lon = positions
        .iter()
        .find(|&&(g, _)| g == lord)
        .map(|&(_, lon)| lon)?;
    let lord_sign = rashi_from_longitude(lord_lon);

    let base = sign_count(sign.index(), lord_sign.index()) - 1;
    let mut years = if base == 0 { 12 } else { i32::from(base) };
    if lord_sign == lord.exaltation_rashi() {
        years += 1;
    } else if lord_sign == lord.debilitation_rashi() {
        years -= 1;
    }
    Some(f64::from(years.clamp(1, 12)))
}

/// Twelve equal antardashas counted from the next sign in `forward`
/// direction.
fn antardashas(
    maha_sign: Rashi,
    start_jd: f64,
    end_jd: f64,
    forward: bool,
) -> Vec<DashaPeriod> {
    let len = (end_jd - start_jd) / 12.0;
    (0..12u8)
        .map(|k| {
            let offset = k + 1;
            let idx = if forward {
                (maha_sign.index() + offset) % 12
            } else {
                (maha_sign.index() + 12 - offset % 12) % 12
            };
            DashaPeriod::new(
                DashaLord::Rashi(Rashi::from_index(idx)),
                start_jd + f64::from(k) * len,
                start_jd + f64::from(k + 1) * len,
            )
        })
        .collect()
}

/// Chara dasha from the lagna and the grahas' sidereal longitudes.
///
/// # Arguments
/// * `lagna_sidereal_lon` — sidereal ascendant longitude, degrees
/// * `positions` — (graha, sidereal longitude) pairs for the chart
/// * `birth_jd_ut` — birth instant, JD UT
///
/// Twelve mahadashas starting from the lagna sign, proceeding forward
/// when the lagna sign is savya and reverse otherwise. The opening
/// period keeps only the untraversed fraction of the lagna sign. If any
/// sign's lord is missing from `positions`, that period and every later
/// one carry `DashaSpan::Unavailable`.
pub fn chara(
    lagna_sidereal_lon: f64,
    positions: &[(Graha, f64)],
    birth_jd_ut: f64,
) -> Vec<DashaPeriod> {
    let lagna_sign = rashi_from_longitude(lagna_sidereal_lon);
    let forward = is_savya(lagna_sign.index());
    let lagna_frac = normalize_360(lagna_sidereal_lon) % 30.0 / 30.0;

    let mut periods = Vec::with_capacity(12);
    let mut cursor = Some(birth_jd_ut);

    for i in 0..12u8 {
        let idx = if forward {
            (lagna_sign.index() + i) % 12
        } else {
            (lagna_sign.index() + 12 - i % 12) % 12
        };
        let sign = Rashi::from_index(idx);

        let span = match (cursor, period_years(sign, positions)) {
            (Some(start), Some(years)) => {
                let full_days = years * DAYS_PER_YEAR;
                let days = if i == 0 {
                    full_days * (1.0 - lagna_frac)
                } else {
                    full_days
                };
                let end = start + days;
                cursor = Some(end);
                DashaSpan::Timed { start_jd_ut: start, end_jd_ut: end }
            }
            _ => {
                cursor = None;
                DashaSpan::Unavailable
            }
        };

        let sub_periods = match span {
            DashaSpan::Timed { start_jd_ut, end_jd_ut } => {
                antardashas(sign, start_jd_ut, end_jd_ut, forward)
            }
            DashaSpan::Unavailable => Vec::new(),
        };

        periods.push(DashaPeriod { lord: DashaLord::Rashi(sign), span, sub_periods });
    }
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRTH: f64 = 2_451_545.0;

    /// Lagna in Mesha; lords scattered over distinct signs.
    fn test_positions() -> Vec<(Graha, f64)> {
        vec![
            (Graha::Surya, 40.0),    // Vrishabha
            (Graha::Chandra, 75.0),  // Mithuna
            (Graha::Mangal, 195.0),  // Tula
            (Graha::Buddh, 160.0),   // Kanya
            (Graha::Guru, 250.0),    // Dhanu
            (Graha::Shukra, 310.0),  // Kumbha
            (Graha::Shani, 100.0),   // Karka
            (Graha::Rahu, 10.0),     // Mesha
            (Graha::Ketu, 190.0),    // Tula
        ]
    }

    fn timed(p: &DashaPeriod) -> (f64, f64) {
        match p.span {
            DashaSpan::Timed { start_jd_ut, end_jd_ut } => (start_jd_ut, end_jd_ut),
            DashaSpan::Unavailable => panic!("untimed period"),
        }
    }

    #[test]
    fn savya_membership() {
        assert!(is_savya(0));
        assert!(is_savya(8));
        assert!(!is_savya(3));
        assert!(!is_savya(11));
    }

    #[test]
    fn mesha_period_from_mars_in_tula() {
        // Mesha is savya: forward count 0→6 is 7, period 6 years.
        let years = period_years(Rashi::Mesha, &test_positions()).unwrap();
        assert!((years - 6.0).abs() < 1e-12);
    }

    #[test]
    fn karka_counts_reverse() {
        // Karka (3) is apasavya; Moon in Mithuna (2): reverse count
        // 3→2 is 2, period 1 year.
        let years = period_years(Rashi::Karka, &test_positions()).unwrap();
        assert!((years - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lord_in_own_sign_gives_twelve() {
        let positions = vec![(Graha::Mangal, 5.0)]; // Mars in Mesha
        let years = period_years(Rashi::Mesha, &positions).unwrap();
        assert!((years - 12.0).abs() < 1e-12);
    }

    #[test]
    fn exalted_lord_adds_a_year() {
        // Mars exalted in Makara (9): forward count 0→9 is 10,
        // base 9, +1 exaltation = 10 years.
        let positions = vec![(Graha::Mangal, 280.0)];
        let years = period_years(Rashi::Mesha, &positions).unwrap();
        assert!((years - 10.0).abs() < 1e-12);
    }

    #[test]
    fn debilitated_lord_loses_a_year() {
        // Mars debilitated in Karka (3): forward count 0→3 is 4,
        // base 3, -1 debilitation = 2 years.
        let positions = vec![(Graha::Mangal, 100.0)];
        let years = period_years(Rashi::Mesha, &positions).unwrap();
        assert!((years - 2.0).abs() < 1e-12);
    }

    #[test]
    fn twelve_contiguous_periods_from_lagna() {
        let periods = chara(15.0, &test_positions(), BIRTH);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[0].lord, DashaLord::Rashi(Rashi::Mesha));
        assert_eq!(periods[1].lord, DashaLord::Rashi(Rashi::Vrishabha));
        for w in periods.windows(2) {
            assert!((timed(&w[1]).0 - timed(&w[0]).1).abs() < 1e-9);
        }
    }

    #[test]
    fn opening_balance_scales_with_lagna_degree() {
        // Lagna at 15 deg Mesha: half the sign traversed, half the
        // period remains.
        let full = period_years(Rashi::Mesha, &test_positions()).unwrap();
        let periods = chara(15.0, &test_positions(), BIRTH);
        let (start, end) = timed(&periods[0]);
        assert!((end - start - full * DAYS_PER_YEAR / 2.0).abs() < 1e-6);
    }

    #[test]
    fn antardashas_divide_equally() {
        let periods = chara(15.0, &test_positions(), BIRTH);
        let maha = &periods[1];
        assert_eq!(maha.sub_periods.len(), 12);
        let (m_start, m_end) = timed(maha);
        let expect = (m_end - m_start) / 12.0;
        for sub in &maha.sub_periods {
            let (s, e) = timed(sub);
            assert!((e - s - expect).abs() < 1e-9);
        }
        // Subs open with the sign after the mahadasha sign.
        assert_eq!(maha.sub_periods[0].lord, DashaLord::Rashi(Rashi::Mithuna));
    }

    #[test]
    fn missing_lord_marks_remainder_unavailable() {
        // Without Mars, Mesha and Vrischika periods cannot be timed.
        let positions: Vec<(Graha, f64)> = test_positions()
            .into_iter()
            .filter(|&(g, _)| g != Graha::Mangal)
            .collect();
        let periods = chara(15.0, &positions, BIRTH);
        assert_eq!(periods[0].span, DashaSpan::Unavailable);
        assert!(periods.iter().all(|p| p.span == DashaSpan::Unavailable));
    }
}

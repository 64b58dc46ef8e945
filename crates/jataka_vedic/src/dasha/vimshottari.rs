//! Vimshottari dasha (120-year nakshatra cycle) and its Tribhagi
//! variant.
//!
//! The Moon's nakshatra at birth picks the opening lord; the fraction
//! of the nakshatra already traversed consumes the same fraction of
//! that lord's period. Each mahadasha carries nine antardashas whose
//! lengths are proportional to the sub-lords' full years.

use crate::dasha::types::{DAYS_PER_YEAR, DashaLord, DashaPeriod, DashaSpan};
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

/// The nine Vimshottari lords and their years, in cycle order starting
/// from Ketu (lord of Ashwini). Years total 120.
pub const VIMSHOTTARI_LORDS: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Number of mahadashas produced per query.
pub const VIMSHOTTARI_PERIOD_COUNT: usize = 16;

/// Antardashas of one mahadasha, starting from the mahadasha lord.
///
/// Sub-period length = maha_years * sub_years / 120. When the notional
/// mahadasha start precedes birth (opening balance period), sub-periods
/// that end before birth are dropped and the first surviving one is
/// clipped to the birth instant.
fn antardashas(
    lord_index: usize,
    notional_start_jd: f64,
    maha_years: f64,
    birth_jd: f64,
) -> Vec<DashaPeriod> {
    let mut subs = Vec::with_capacity(9);
    let mut cursor = notional_start_jd;
    for k in 0..9 {
        let (sub_lord, sub_years) = VIMSHOTTARI_LORDS[(lord_index + k) % 9];
        let len_days = maha_years * sub_years / VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
        let end = cursor + len_days;
        if end > birth_jd {
            subs.push(DashaPeriod::new(
                DashaLord::Graha(sub_lord),
                cursor.max(birth_jd),
                end,
            ));
        }
        cursor = end;
    }
    subs
}

/// Vimshottari mahadashas with antardashas from a birth instant.
///
/// # Arguments
/// * `moon_sidereal_lon` — sidereal Moon longitude at birth, degrees
/// * `birth_jd_ut` — birth instant, JD UT
///
/// Returns 16 mahadashas: the opening balance period followed by
/// fifteen full ones.
pub fn vimshottari(moon_sidereal_lon: f64, birth_jd_ut: f64) -> Vec<DashaPeriod> {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let first = (nak.index % 9) as usize;
    let elapsed_frac = nak.fraction_traversed();

    let mut periods = Vec::with_capacity(VIMSHOTTARI_PERIOD_COUNT);
    // The opening mahadasha notionally began before birth.
    let (_, first_years) = VIMSHOTTARI_LORDS[first];
    let mut notional_start = birth_jd_ut - elapsed_frac * first_years * DAYS_PER_YEAR;

    for k in 0..VIMSHOTTARI_PERIOD_COUNT {
        let idx = (first + k) % 9;
        let (lord, years) = VIMSHOTTARI_LORDS[idx];
        let end = notional_start + years * DAYS_PER_YEAR;
        let mut period =
            DashaPeriod::new(DashaLord::Graha(lord), notional_start.max(birth_jd_ut), end);
        period.sub_periods = antardashas(idx, notional_start, years, birth_jd_ut);
        periods.push(period);
        notional_start = end;
    }
    periods
}

/// Tribhagi variant: each Vimshottari mahadasha keeps its start but
/// runs only a third of its length.
///
/// The periods are deliberately non-contiguous; the remaining two
/// thirds of each slot belong to no lord. No antardashas are produced.
pub fn tribhagi(moon_sidereal_lon: f64, birth_jd_ut: f64) -> Vec<DashaPeriod> {
    vimshottari(moon_sidereal_lon, birth_jd_ut)
        .into_iter()
        .map(|p| {
            let (start, end) = match p.span {
                DashaSpan::Timed { start_jd_ut, end_jd_ut } => (start_jd_ut, end_jd_ut),
                DashaSpan::Unavailable => return p,
            };
            DashaPeriod::new(p.lord, start, start + (end - start) / 3.0)
        })
        .collect()
}

//! Ashtottari dasha: a 108-year cycle of eight graha lords.
//!
//! Unlike Vimshottari, the lords rule unequal runs of nakshatras, so
//! the opening lord comes from a 27-entry lookup. Four nakshatras swap
//! lords when the birth falls in the Krishna paksha. Each mahadasha
//! carries eight antardashas proportional to the sub-lords' years.

use crate::dasha::types::{DAYS_PER_YEAR, DashaLord, DashaPeriod};
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;
use crate::panchang::Paksha;

/// The eight Ashtottari lords and their years, in cycle order.
/// Years total 108.
pub const ASHTOTTARI_LORDS: [(Graha, f64); 8] = [
    (Graha::Surya, 6.0),
    (Graha::Chandra, 15.0),
    (Graha::Mangal, 8.0),
    (Graha::Buddh, 17.0),
    (Graha::Shani, 10.0),
    (Graha::Guru, 19.0),
    (Graha::Rahu, 12.0),
    (Graha::Shukra, 21.0),
];

/// Full cycle length in years.
pub const ASHTOTTARI_TOTAL_YEARS: f64 = 108.0;

/// Number of periods produced per query (balance plus one full cycle).
pub const ASHTOTTARI_PERIOD_COUNT: usize = 9;

/// Opening lord (index into `ASHTOTTARI_LORDS`) per nakshatra.
///
/// The runs are uneven: Rahu rules Ashwini-Bharani and the tail from
/// Uttara Bhadrapada, Venus Krittika through Rohini, and so on.
const NAKSHATRA_LORD: [u8; 27] = [
    6, 6, 7, 7, 7, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 5, 6, 6,
];

/// Krishna-paksha overrides: (nakshatra index, lord index).
const KRISHNA_OVERRIDES: [(u8, u8); 4] = [(4, 0), (12, 2), (21, 5), (2, 6)];

/// Antardashas of one mahadasha, starting from the mahadasha lord.
///
/// Sub-period length = maha_years * sub_years / 108. Sub-periods that
/// end before birth are dropped and the first surviving one is clipped
/// to the birth instant.
fn antardashas(
    lord_index: usize,
    notional_start_jd: f64,
    maha_years: f64,
    birth_jd: f64,
) -> Vec<DashaPeriod> {
    let mut subs = Vec::with_capacity(8);
    let mut cursor = notional_start_jd;
    for k in 0..8 {
        let (sub_lord, sub_years) = ASHTOTTARI_LORDS[(lord_index + k) % 8];
        let len_days =
            maha_years * sub_years / ASHTOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
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

/// Opening lord index for a nakshatra and paksha.
fn opening_lord(nak_index: u8, paksha: Paksha) -> usize {
    if paksha == Paksha::Krishna {
        for &(nak, lord) in &KRISHNA_OVERRIDES {
            if nak == nak_index {
                return lord as usize;
            }
        }
    }
    NAKSHATRA_LORD[(nak_index % 27) as usize] as usize
}

/// Ashtottari dasha periods from a birth instant.
///
/// # Arguments
/// * `moon_sidereal_lon` — sidereal Moon longitude at birth, degrees
/// * `paksha` — lunar fortnight at birth
/// * `birth_jd_ut` — birth instant, JD UT
///
/// The opening balance uses the traversed fraction of the birth
/// nakshatra against the opening lord's full years.
pub fn ashtottari(
    moon_sidereal_lon: f64,
    paksha: Paksha,
    birth_jd_ut: f64,
) -> Vec<DashaPeriod> {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let first = opening_lord(nak.index, paksha);
    let elapsed_frac = nak.fraction_traversed();

    let mut periods = Vec::with_capacity(ASHTOTTARI_PERIOD_COUNT);
    let (_, first_years) = ASHTOTTARI_LORDS[first];
    let mut notional_start = birth_jd_ut - elapsed_frac * first_years * DAYS_PER_YEAR;

    for k in 0..ASHTOTTARI_PERIOD_COUNT {
        let idx = (first + k) % 8;
        let (lord, years) = ASHTOTTARI_LORDS[idx];
        let end = notional_start + years * DAYS_PER_YEAR;
        let mut period = DashaPeriod::new(
            DashaLord::Graha(lord),
            notional_start.max(birth_jd_ut),
            end,
        );
        period.sub_periods = antardashas(idx, notional_start, years, birth_jd_ut);
        periods.push(period);
        notional_start = end;
    }
    periods
}

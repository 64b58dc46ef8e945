//! Yogini dasha: a 36-year cycle of eight yoginis.
//!
//! The lords run Mangala (1 year) through Sankata (8 years); the
//! opening yogini is picked from the Moon's nakshatra as
//! `(index + 3) mod 8`, with the usual balance rule on the traversed
//! fraction.

use crate::dasha::types::{DAYS_PER_YEAR, DashaLord, DashaPeriod};
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

/// The eight yoginis in cycle order. Years equal position + 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yogini {
    Mangala,
    Pingala,
    Dhanya,
    Bhramari,
    Bhadrika,
    Ulka,
    Siddha,
    Sankata,
}

/// All eight yoginis in cycle order.
pub const ALL_YOGINIS: [Yogini; 8] = [
    Yogini::Mangala,
    Yogini::Pingala,
    Yogini::Dhanya,
    Yogini::Bhramari,
    Yogini::Bhadrika,
    Yogini::Ulka,
    Yogini::Siddha,
    Yogini::Sankata,
];

/// Full cycle length in years (1 + 2 + ... + 8).
pub const YOGINI_TOTAL_YEARS: f64 = 36.0;

/// Number of periods produced per query.
pub const YOGINI_PERIOD_COUNT: usize = 17;

impl Yogini {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangala => "Mangala",
            Self::Pingala => "Pingala",
            Self::Dhanya => "Dhanya",
            Self::Bhramari => "Bhramari",
            Self::Bhadrika => "Bhadrika",
            Self::Ulka => "Ulka",
            Self::Siddha => "Siddha",
            Self::Sankata => "Sankata",
        }
    }

    /// 0-based position in the cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Period length in years.
    pub const fn years(self) -> f64 {
        self.index() as f64 + 1.0
    }

    /// Ruling graha of the yogini.
    pub const fn ruler(self) -> Graha {
        match self {
            Self::Mangala => Graha::Chandra,
            Self::Pingala => Graha::Surya,
            Self::Dhanya => Graha::Guru,
            Self::Bhramari => Graha::Mangal,
            Self::Bhadrika => Graha::Buddh,
            Self::Ulka => Graha::Shani,
            Self::Siddha => Graha::Shukra,
            Self::Sankata => Graha::Rahu,
        }
    }
}

/// Yogini dasha periods from a birth instant.
///
/// Returns 17 periods: the opening balance plus two full cycles.
pub fn yogini(moon_sidereal_lon: f64, birth_jd_ut: f64) -> Vec<DashaPeriod> {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let first = ((nak.index + 3) % 8) as usize;
    let elapsed_frac = nak.fraction_traversed();

    let mut periods = Vec::with_capacity(YOGINI_PERIOD_COUNT);
    let mut notional_start =
        birth_jd_ut - elapsed_frac * ALL_YOGINIS[first].years() * DAYS_PER_YEAR;

    for k in 0..YOGINI_PERIOD_COUNT {
        let lord = ALL_YOGINIS[(first + k) % 8];
        let end = notional_start + lord.years() * DAYS_PER_YEAR;
        periods.push(DashaPeriod::new(
            DashaLord::Yogini(lord),
            notional_start.max(birth_jd_ut),
            end,
        ));
        notional_start = end;
    }
    periods
}

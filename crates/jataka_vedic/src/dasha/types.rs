//! Core types shared across the dasha (planetary period) systems.

use crate::dasha::yogini::Yogini;
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Year length used for dasha period arithmetic, in days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The five supported dasha systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashaSystem {
    /// 120-year nakshatra dasha, nine graha lords.
    Vimshottari,
    /// Vimshottari starts with each period shortened to its third.
    Tribhagi,
    /// 36-year cycle of eight yoginis.
    Yogini,
    /// 108-year nakshatra dasha, eight lords.
    Ashtottari,
    /// Jaimini rashi dasha from the lagna.
    Chara,
}

impl DashaSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vimshottari => "Vimshottari",
            Self::Tribhagi => "Tribhagi",
            Self::Yogini => "Yogini",
            Self::Ashtottari => "Ashtottari",
            Self::Chara => "Chara",
        }
    }
}

/// All supported systems in order.
pub const ALL_DASHA_SYSTEMS: [DashaSystem; 5] = [
    DashaSystem::Vimshottari,
    DashaSystem::Tribhagi,
    DashaSystem::Yogini,
    DashaSystem::Ashtottari,
    DashaSystem::Chara,
];

/// What entity rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashaLord {
    Graha(Graha),
    Rashi(Rashi),
    Yogini(Yogini),
}

impl DashaLord {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Rashi(r) => r.name(),
            Self::Yogini(y) => y.name(),
        }
    }
}

/// Time extent of a period.
///
/// `Unavailable` marks a period whose length could not be derived, such
/// as a Chara dasha whose sign lord is absent from the supplied chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashaSpan {
    Timed {
        /// JD UT, inclusive.
        start_jd_ut: f64,
        /// JD UT, exclusive.
        end_jd_ut: f64,
    },
    Unavailable,
}

impl DashaSpan {
    pub fn duration_days(&self) -> Option<f64> {
        match *self {
            Self::Timed { start_jd_ut, end_jd_ut } => Some(end_jd_ut - start_jd_ut),
            Self::Unavailable => None,
        }
    }

    pub fn contains(&self, jd_ut: f64) -> bool {
        matches!(
            *self,
            Self::Timed { start_jd_ut, end_jd_ut }
                if start_jd_ut <= jd_ut && jd_ut < end_jd_ut
        )
    }
}

/// A single period, with optional nested sub-periods.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaPeriod {
    pub lord: DashaLord,
    pub span: DashaSpan,
    /// Antardashas, empty for systems computed to one level.
    pub sub_periods: Vec<DashaPeriod>,
}

impl DashaPeriod {
    pub fn new(lord: DashaLord, start_jd_ut: f64, end_jd_ut: f64) -> Self {
        Self {
            lord,
            span: DashaSpan::Timed { start_jd_ut, end_jd_ut },
            sub_periods: Vec::new(),
        }
    }
}

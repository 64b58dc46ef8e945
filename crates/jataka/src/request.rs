//! Request types: birth details and chart options.

use jataka_time::UtcInstant;
use jataka_vedic::Varga;
use jataka_vedic::dasha::DashaSystem;

use crate::error::ChartError;

/// A single-chart request.
///
/// The datetime is local civil time without a zone marker; the zone is
/// the separate decimal-hour UTC offset (`+5.75` for Nepal).
#[derive(Debug, Clone, PartialEq)]
pub struct BirthDetails {
    /// Opaque label, echoed in the response, never used in computation.
    pub name: String,
    /// Local civil datetime, `YYYY-MM-DDTHH:MM[:SS]` (space accepted
    /// in place of `T`).
    pub datetime: String,
    /// Degrees, north positive, [-90, 90].
    pub latitude: f64,
    /// Degrees, east positive, [-180, 180].
    pub longitude: f64,
    /// Decimal hours east of UTC, [-14, 14].
    pub utc_offset_hours: f64,
}

/// Zodiac convention. Only sidereal is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zodiac {
    #[default]
    Sidereal,
}

/// Ayanamsha convention. Only Lahiri is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AyanamshaKind {
    #[default]
    Lahiri,
}

/// House system. Only whole-sign is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HouseSystem {
    #[default]
    WholeSign,
}

/// Options record on a chart request.
///
/// Only `divisional_charts` varies behavior today; the other fields
/// document the fixed conventions and the intended extension points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub zodiac: Zodiac,
    pub ayanamsha: AyanamshaKind,
    pub house_system: HouseSystem,
    pub divisional_charts: Vec<Varga>,
    pub dasha_system: DashaSystem,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            zodiac: Zodiac::Sidereal,
            ayanamsha: AyanamshaKind::Lahiri,
            house_system: HouseSystem::WholeSign,
            divisional_charts: jataka_vedic::CLASSICAL_VARGAS.to_vec(),
            dasha_system: DashaSystem::Vimshottari,
        }
    }
}

/// Days in a civil month, Julian leap rule before the 1582 Gregorian
/// reform and Gregorian after, matching the JD conversion's cutover.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year > 1582 {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            } else {
                year % 4 == 0
            };
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

fn parse_u32(s: &str, what: &str, full: &str) -> Result<u32, ChartError> {
    s.parse::<u32>()
        .map_err(|_| ChartError::InvalidDateTime(format!("{full} ({what})")))
}

/// Parse a local civil datetime string into calendar fields.
///
/// Accepts `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS`, and the same
/// with a space separator. Seconds may carry a fraction.
pub fn parse_local_datetime(s: &str) -> Result<UtcInstant, ChartError> {
    let bad = || ChartError::InvalidDateTime(s.to_string());

    let (date, time) = s
        .split_once('T')
        .or_else(|| s.split_once(' '))
        .ok_or_else(bad)?;

    let mut date_parts = date.splitn(3, '-');
    let year = date_parts
        .next()
        .ok_or_else(bad)?
        .parse::<i32>()
        .map_err(|_| bad())?;
    let month = parse_u32(date_parts.next().ok_or_else(bad)?, "month", s)?;
    let day = parse_u32(date_parts.next().ok_or_else(bad)?, "day", s)?;

    let mut time_parts = time.splitn(3, ':');
    let hour = parse_u32(time_parts.next().ok_or_else(bad)?, "hour", s)?;
    let minute = parse_u32(time_parts.next().ok_or_else(bad)?, "minute", s)?;
    let second = match time_parts.next() {
        Some(sec) => sec.parse::<f64>().map_err(|_| bad())?,
        None => 0.0,
    };

    let valid = (1..=12).contains(&month)
        && (1..=days_in_month(year, month)).contains(&day)
        && hour < 24
        && minute < 60
        && (0.0..60.0).contains(&second);
    if !valid {
        return Err(bad());
    }
    Ok(UtcInstant::new(year, month, day, hour, minute, second))
}

impl BirthDetails {
    /// Validate fields and return the birth instant as JD (UT).
    pub fn to_jd_ut(&self) -> Result<f64, ChartError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidCoordinates(format!(
                "latitude {} out of [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidCoordinates(format!(
                "longitude {} out of [-180, 180]",
                self.longitude
            )));
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(ChartError::InvalidUtcOffset(self.utc_offset_hours));
        }
        let local = parse_local_datetime(&self.datetime)?;
        Ok(local.to_jd_ut() - self.utc_offset_hours / 24.0)
    }
}

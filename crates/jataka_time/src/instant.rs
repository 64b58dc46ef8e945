//! UTC calendar date/time with sub-second precision.
//!
//! `UtcInstant` is the canonical calendar representation in chart output.
//! Internally all computation runs on Julian Days; instants are produced
//! only at the output boundary.

use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Day on the UT scale.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a Julian Day on the UT scale back to a calendar instant.
    ///
    /// The day is rounded to whole milliseconds before the fields are
    /// split out, so an instant a hair under midnight rolls over to the
    /// next calendar day instead of printing a 60th second.
    pub fn from_jd_ut(jd_ut: f64) -> Self {
        const MS_PER_DAY: f64 = 86_400_000.0;
        let jd = (jd_ut * MS_PER_DAY).round() / MS_PER_DAY;
        let (mut year, mut month, mut day_frac) = jd_to_calendar(jd);
        let mut total_ms = (day_frac.fract() * MS_PER_DAY).round() as i64;
        if total_ms >= 86_400_000 {
            // The calendar split left a residue just under a day.
            (year, month, day_frac) = jd_to_calendar(jd + 1.0 / MS_PER_DAY);
            total_ms = 0;
        }
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour: (total_ms / 3_600_000) as u32,
            minute: (total_ms % 3_600_000 / 60_000) as u32,
            second: (total_ms % 60_000) as f64 / 1000.0,
        }
    }
}

impl std::fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_seconds() {
        let t = UtcInstant::new(2000, 1, 1, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2000-01-01T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcInstant::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.to_string(), "2024-03-20T12:30:45.500Z");
    }

    #[test]
    fn jd_round_trip() {
        let t = UtcInstant::new(1999, 12, 31, 18, 15, 0.0);
        let jd = t.to_jd_ut();
        let back = UtcInstant::from_jd_ut(jd);
        assert_eq!(back.year, 1999);
        assert_eq!(back.month, 12);
        assert_eq!(back.day, 31);
        assert_eq!(back.hour, 18);
        assert_eq!(back.minute, 15);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn sub_millisecond_before_midnight_rolls_over() {
        // Within half a millisecond of a month-end midnight the instant
        // must land on the next day's 0h, never a 60th second.
        let jd = UtcInstant::new(2000, 1, 31, 23, 59, 59.9999).to_jd_ut();
        let t = UtcInstant::from_jd_ut(jd);
        assert_eq!((t.year, t.month, t.day), (2000, 2, 1));
        assert_eq!((t.hour, t.minute), (0, 0));
        assert_eq!(t.second, 0.0);
        assert_eq!(t.to_string(), "2000-02-01T00:00:00Z");
    }

    #[test]
    fn j2000_midnight() {
        let t = UtcInstant::new(2000, 1, 1, 0, 0, 0.0);
        assert!((t.to_jd_ut() - 2_451_544.5).abs() < 1e-9);
    }
}

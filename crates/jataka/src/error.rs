//! The single error boundary for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced by the facade.
///
/// All internal math is exception-free; the only failure modes are
/// malformed request fields. Domain edge cases (circumpolar rise/set,
/// an untimeable Chara period) degrade inside the chart instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth datetime string could not be parsed.
    InvalidDateTime(String),
    /// Latitude or longitude outside its valid range.
    InvalidCoordinates(String),
    /// UTC offset outside the plausible [-14, +14] hour band.
    InvalidUtcOffset(f64),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateTime(s) => write!(f, "invalid birth datetime: {s}"),
            Self::InvalidCoordinates(msg) => write!(f, "invalid coordinates: {msg}"),
            Self::InvalidUtcOffset(h) => write!(f, "invalid UTC offset: {h} hours"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ChartError::InvalidDateTime("garbage".into());
        assert!(e.to_string().contains("garbage"));
        let e = ChartError::InvalidUtcOffset(99.0);
        assert!(e.to_string().contains("99"));
    }
}

//! High-level natal chart facade over the jataka computation crates.
//!
//! Takes birth details plus chart options and returns a complete natal
//! profile: graha positions, houses, panchang elements, dasha
//! timelines, divisional charts, the matching profile, and rise/set
//! times. The lower crates stay total-function; this crate owns input
//! validation and the single error type, [`ChartError`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jataka::*;
//!
//! let details = BirthDetails {
//!     name: "native".into(),
//!     datetime: "2000-01-01T00:00:00".into(),
//!     latitude: 27.7172,
//!     longitude: 85.3240,
//!     utc_offset_hours: 5.75,
//! };
//! let chart = NatalChart::compute(&details, &ChartOptions::default())?;
//! println!("lagna: {}", chart.ascendant_rashi.name());
//! # Ok::<(), ChartError>(())
//! ```

pub mod chart;
pub mod compare;
pub mod error;
pub mod request;

// Primary re-exports — users should only need `use jataka::*`
pub use chart::{
    CalculationInfo, DashaTimeline, DivisionalChart, ElementReport, GrahaPosition,
    NatalChart, VargaPosition,
};
pub use compare::{ChartComparison, compare_charts};
pub use error::ChartError;
pub use request::{AyanamshaKind, BirthDetails, ChartOptions, HouseSystem, Zodiac};

//! Time scales for natal-chart computation.
//!
//! This crate provides:
//! - Civil calendar ↔ Julian Day conversion with the 1582-10-15 Gregorian cutover
//! - Delta-T (UT → Terrestrial Time) from a decadal empirical table with
//!   parabolic extrapolation outside 1620–2030
//! - Greenwich / local sidereal time
//! - `UtcInstant`, the calendar representation used in all chart output
//!
//! All implementations are clean-room, derived from standard published
//! astronomical algorithms (Meeus, IERS).

pub mod delta_t;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use delta_t::delta_t_seconds;
pub use instant::UtcInstant;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar, jd_tt_to_centuries, jd_ut_to_tt};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};

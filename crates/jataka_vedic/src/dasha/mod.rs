//! Dasha (planetary period) systems.
//!
//! Five systems: the nakshatra-based Vimshottari (with its Tribhagi
//! variant), Yogini, and Ashtottari, and the rashi-based Jaimini Chara.
//! All take pre-computed sidereal longitudes; nothing here touches the
//! ephemeris.

pub mod ashtottari;
pub mod chara;
pub mod types;
pub mod vimshottari;
pub mod yogini;

pub use ashtottari::{ASHTOTTARI_LORDS, ashtottari};
pub use chara::chara;
pub use types::{
    ALL_DASHA_SYSTEMS, DAYS_PER_YEAR, DashaLord, DashaPeriod, DashaSpan, DashaSystem,
};
pub use vimshottari::{VIMSHOTTARI_LORDS, tribhagi, vimshottari};
pub use yogini::{ALL_YOGINIS, Yogini, yogini};

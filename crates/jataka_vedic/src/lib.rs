//! Vedic astrology primitives on top of the analytic ephemerides.
//!
//! This crate covers the classification layer of a natal chart:
//! - sidereal reduction (Lahiri ayanamsha)
//! - rashi, nakshatra, and pada classification
//! - the lagna and whole-sign houses
//! - panchang elements (tithi, nakshatra, yoga, karana) with boundary
//!   instants
//! - divisional (varga) charts
//! - five dasha systems
//! - Ashtakoota marriage matching
//! - sunrise/sunset and moonrise/moonset
//!
//! Everything here is pure arithmetic over longitudes and instants;
//! ephemeris access stays in `jataka_ephem`.

pub mod amsha;
pub mod ayanamsha;
pub mod dasha;
pub mod graha;
pub mod koota;
pub mod lagna;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod riseset;
pub mod util;

pub use amsha::{CLASSICAL_VARGAS, Varga, varga_longitude, varga_sign_and_degrees};
pub use ayanamsha::{LAHIRI_J2000_DEG, lahiri_ayanamsha_deg, tropical_to_sidereal};
pub use graha::{ALL_GRAHAS, Graha, Maitri};
pub use koota::{
    ASHTAKOOTA_MAX, AshtaKootaProfile, Gana, GunaMilan, KootaScore, MatchGrade, Nadi, Paya,
    Varna, Vasya, Yoni, ashtakoota_profile, ashtakoota_score, guna_milan,
};
pub use lagna::{HouseCusp, ascendant_tropical_deg, house_of, whole_sign_houses};
pub use nakshatra::{
    NAKSHATRA_NAMES, NAKSHATRA_SPAN, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{
    ElementKind, Paksha, TimedElement, element_angle_deg, element_at, elements_for_day,
    find_boundary_crossing, karana_name, tithi_name, tithi_paksha, yoga_name,
};
pub use rashi::{ALL_RASHIS, Modality, Rashi, Tatva, degrees_in_rashi, rashi_from_longitude};
pub use riseset::{GeoLocation, RiseEvent, moon_rise_set, sun_rise_set};
pub use util::{Dms, deg_to_dms, normalize_360, wrap_pm180};

//! Natal chart computation: the aggregate root and its construction.
//!
//! `NatalChart::compute` runs the whole pipeline for one birth: time
//! normalization, the nine graha positions, ascendant and houses, the
//! four panchang elements with boundary instants, five dasha timelines,
//! the requested divisional charts, the matching profile, and the four
//! rise/set strings. The aggregate is immutable once built; any change
//! of input means a full recomputation.

use jataka_ephem::{
    KETU_NOMINAL_SPEED, Planet, RAHU_NOMINAL_SPEED, longitude_speed_deg_per_day,
    moon_latitude_deg, moon_longitude_deg, normalize_360, planet_position,
    rahu_longitude_deg, sun_longitude_deg,
};
use jataka_time::{UtcInstant, calendar_to_jd, jd_tt_to_centuries, jd_ut_to_tt};
use jataka_vedic::dasha::{
    DashaPeriod, DashaSystem, ashtottari, chara, tribhagi, vimshottari, yogini,
};
use jataka_vedic::{
    ALL_GRAHAS, AshtaKootaProfile, ElementKind, GeoLocation, Graha, HouseCusp, Paksha,
    Rashi, Varga, ascendant_tropical_deg, ashtakoota_profile, element_at,
    lahiri_ayanamsha_deg, moon_rise_set, nakshatra_from_longitude, rashi_from_longitude,
    sun_rise_set, tithi_paksha, tropical_to_sidereal, varga_longitude, whole_sign_houses,
};

use crate::error::ChartError;
use crate::request::{BirthDetails, ChartOptions};

/// One graha's computed state in the rashi chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, [0, 360).
    pub longitude: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub latitude: f64,
    /// Tropical longitudinal speed, degrees/day.
    pub speed: f64,
    pub rashi: Rashi,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_sign: f64,
    pub retrograde: bool,
    /// 0-based nakshatra index.
    pub nakshatra_index: u8,
    /// 1-based pada, 1..=4.
    pub pada: u8,
}

/// A panchang element with its UTC boundary instants rendered as
/// ISO-8601 text.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementReport {
    pub name: &'static str,
    /// 0-based index within the element's cycle.
    pub index: u8,
    pub start_utc: Option<String>,
    pub end_utc: Option<String>,
}

/// One graha remapped into a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VargaPosition {
    pub graha: Graha,
    pub rashi: Rashi,
    pub degrees_in_sign: f64,
    /// Carried over from the rashi chart.
    pub retrograde: bool,
    pub nakshatra_index: u8,
    pub pada: u8,
}

/// A complete divisional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionalChart {
    pub varga: Varga,
    pub positions: Vec<VargaPosition>,
    pub ascendant_rashi: Rashi,
    pub ascendant_degrees: f64,
}

/// One dasha system's timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaTimeline {
    pub system: DashaSystem,
    pub periods: Vec<DashaPeriod>,
}

/// Calculation metadata echoed in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInfo {
    pub engine: &'static str,
    pub version: &'static str,
    pub zodiac: &'static str,
    pub ayanamsha_name: &'static str,
    /// Lahiri ayanamsha at the birth instant, degrees.
    pub ayanamsha_deg: f64,
    pub house_system: &'static str,
    /// When the chart was computed, UTC ISO-8601.
    pub computed_at_utc: String,
}

/// The aggregate root: everything computed for one birth.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    pub details: BirthDetails,
    pub info: CalculationInfo,
    /// Birth instant, JD UT.
    pub birth_jd_ut: f64,
    /// The nine grahas in `ALL_GRAHAS` order.
    pub positions: Vec<GrahaPosition>,
    /// Sidereal ascendant longitude, degrees.
    pub ascendant: f64,
    pub ascendant_rashi: Rashi,
    pub houses: [HouseCusp; 12],
    pub tithi: ElementReport,
    pub nakshatra: ElementReport,
    pub yoga: ElementReport,
    pub karana: ElementReport,
    pub dashas: Vec<DashaTimeline>,
    pub divisional_charts: Vec<DivisionalChart>,
    pub profile: AshtaKootaProfile,
    /// `HH:MM` local time, or `"N/A"`.
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
}

/// Tropical longitude of a graha at a TT epoch.
fn tropical_longitude(graha: Graha, jd_tt: f64) -> f64 {
    match graha {
        Graha::Surya => sun_longitude_deg(jd_tt),
        Graha::Chandra => moon_longitude_deg(jd_tt),
        Graha::Mangal => planet_position(Planet::Mars, jd_tt).longitude_deg,
        Graha::Buddh => planet_position(Planet::Mercury, jd_tt).longitude_deg,
        Graha::Guru => planet_position(Planet::Jupiter, jd_tt).longitude_deg,
        Graha::Shukra => planet_position(Planet::Venus, jd_tt).longitude_deg,
        Graha::Shani => planet_position(Planet::Saturn, jd_tt).longitude_deg,
        Graha::Rahu => rahu_longitude_deg(jd_tt),
        Graha::Ketu => normalize_360(rahu_longitude_deg(jd_tt) + 180.0),
    }
}

fn graha_latitude(graha: Graha, jd_tt: f64) -> f64 {
    match graha {
        Graha::Chandra => moon_latitude_deg(jd_tt),
        Graha::Mangal => planet_position(Planet::Mars, jd_tt).latitude_deg,
        Graha::Buddh => planet_position(Planet::Mercury, jd_tt).latitude_deg,
        Graha::Guru => planet_position(Planet::Jupiter, jd_tt).latitude_deg,
        Graha::Shukra => planet_position(Planet::Venus, jd_tt).latitude_deg,
        Graha::Shani => planet_position(Planet::Saturn, jd_tt).latitude_deg,
        // Sun and the nodes sit on the ecliptic by definition here.
        Graha::Surya | Graha::Rahu | Graha::Ketu => 0.0,
    }
}

fn graha_position(graha: Graha, jd_tt: f64, t_centuries: f64) -> GrahaPosition {
    let tropical = tropical_longitude(graha, jd_tt);
    let sidereal = tropical_to_sidereal(tropical, t_centuries);

    let speed = match graha {
        Graha::Rahu => RAHU_NOMINAL_SPEED,
        Graha::Ketu => KETU_NOMINAL_SPEED,
        _ => longitude_speed_deg_per_day(|jd| tropical_longitude(graha, jd), jd_tt),
    };
    // Sun and nodes carry fixed conventions, not the numeric sign.
    let retrograde = match graha {
        Graha::Surya => false,
        Graha::Rahu | Graha::Ketu => true,
        _ => speed < 0.0,
    };

    let nak = nakshatra_from_longitude(sidereal);
    GrahaPosition {
        graha,
        longitude: sidereal,
        latitude: graha_latitude(graha, jd_tt),
        speed,
        rashi: rashi_from_longitude(sidereal),
        degrees_in_sign: sidereal % 30.0,
        retrograde,
        nakshatra_index: nak.index,
        pada: nak.pada,
    }
}

fn element_report(kind: ElementKind, jd_ut: f64) -> ElementReport {
    let e = element_at(kind, jd_ut);
    ElementReport {
        name: e.name(),
        index: e.index,
        start_utc: e.start_jd_ut.map(|jd| UtcInstant::from_jd_ut(jd).to_string()),
        end_utc: e.end_jd_ut.map(|jd| UtcInstant::from_jd_ut(jd).to_string()),
    }
}

/// Render an optional event instant as `HH:MM` local time, or `"N/A"`.
fn local_hhmm(jd_ut: Option<f64>, utc_offset_hours: f64) -> String {
    match jd_ut {
        Some(jd) => {
            let local = UtcInstant::from_jd_ut(jd + utc_offset_hours / 24.0);
            format!("{:02}:{:02}", local.hour, local.minute)
        }
        None => "N/A".to_string(),
    }
}

fn divisional_chart(
    varga: Varga,
    positions: &[GrahaPosition],
    asc_sidereal: f64,
) -> DivisionalChart {
    let mapped_asc = varga_longitude(varga, asc_sidereal);
    DivisionalChart {
        varga,
        positions: positions
            .iter()
            .map(|p| {
                let mapped = varga_longitude(varga, p.longitude);
                let nak = nakshatra_from_longitude(mapped);
                VargaPosition {
                    graha: p.graha,
                    rashi: rashi_from_longitude(mapped),
                    degrees_in_sign: mapped % 30.0,
                    retrograde: p.retrograde,
                    nakshatra_index: nak.index,
                    pada: nak.pada,
                }
            })
            .collect(),
        ascendant_rashi: rashi_from_longitude(mapped_asc),
        ascendant_degrees: mapped_asc % 30.0,
    }
}

/// JD (UT) of the current instant, for the calculation timestamp.
fn now_jd_ut() -> f64 {
    let unix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    2_440_587.5 + unix / 86_400.0
}

impl NatalChart {
    /// Compute the full chart for one birth.
    pub fn compute(
        details: &BirthDetails,
        options: &ChartOptions,
    ) -> Result<NatalChart, ChartError> {
        let birth_jd_ut = details.to_jd_ut()?;
        let jd_tt = jd_ut_to_tt(birth_jd_ut);
        let t = jd_tt_to_centuries(jd_tt);

        // Nine graha positions.
        let positions: Vec<GrahaPosition> = ALL_GRAHAS
            .iter()
            .map(|&g| graha_position(g, jd_tt, t))
            .collect();

        // Ascendant and whole-sign houses.
        let asc_tropical =
            ascendant_tropical_deg(birth_jd_ut, details.latitude, details.longitude);
        let ascendant = tropical_to_sidereal(asc_tropical, t);
        let houses = whole_sign_houses(ascendant);

        // Panchang elements at the birth instant.
        let tithi = element_report(ElementKind::Tithi, birth_jd_ut);
        let nakshatra = element_report(ElementKind::Nakshatra, birth_jd_ut);
        let yoga = element_report(ElementKind::Yoga, birth_jd_ut);
        let karana = element_report(ElementKind::Karana, birth_jd_ut);

        // Dasha timelines, seeded by the Moon and the birth instant.
        let moon = positions[Graha::Chandra.index() as usize].longitude;
        let paksha: Paksha = tithi_paksha(tithi.index);
        let graha_signs: Vec<(Graha, f64)> =
            positions.iter().map(|p| (p.graha, p.longitude)).collect();
        let dashas = vec![
            DashaTimeline {
                system: DashaSystem::Vimshottari,
                periods: vimshottari(moon, birth_jd_ut),
            },
            DashaTimeline {
                system: DashaSystem::Tribhagi,
                periods: tribhagi(moon, birth_jd_ut),
            },
            DashaTimeline {
                system: DashaSystem::Yogini,
                periods: yogini(moon, birth_jd_ut),
            },
            DashaTimeline {
                system: DashaSystem::Ashtottari,
                periods: ashtottari(moon, paksha, birth_jd_ut),
            },
            DashaTimeline {
                system: DashaSystem::Chara,
                periods: chara(ascendant, &graha_signs, birth_jd_ut),
            },
        ];

        // Divisional charts per the options.
        let divisional_charts = options
            .divisional_charts
            .iter()
            .map(|&v| divisional_chart(v, &positions, ascendant))
            .collect();

        let profile = ashtakoota_profile(moon, ascendant);

        // Rise/set over the local civil day.
        let local = crate::request::parse_local_datetime(&details.datetime)?;
        let local_midnight_ut = calendar_to_jd(local.year, local.month, local.day as f64)
            - details.utc_offset_hours / 24.0;
        let site = GeoLocation {
            latitude_deg: details.latitude,
            longitude_deg: details.longitude,
        };
        let sun_ev = sun_rise_set(local_midnight_ut, &site);
        let moon_ev = moon_rise_set(local_midnight_ut, &site);

        Ok(NatalChart {
            details: details.clone(),
            info: CalculationInfo {
                engine: "jataka",
                version: env!("CARGO_PKG_VERSION"),
                zodiac: "Sidereal",
                ayanamsha_name: "Lahiri",
                ayanamsha_deg: lahiri_ayanamsha_deg(t),
                house_system: "Whole Sign",
                computed_at_utc: UtcInstant::from_jd_ut(now_jd_ut()).to_string(),
            },
            birth_jd_ut,
            positions,
            ascendant,
            ascendant_rashi: rashi_from_longitude(ascendant),
            houses,
            tithi,
            nakshatra,
            yoga,
            karana,
            dashas,
            divisional_charts,
            profile,
            sunrise: local_hhmm(sun_ev.rise_jd_ut, details.utc_offset_hours),
            sunset: local_hhmm(sun_ev.set_jd_ut, details.utc_offset_hours),
            moonrise: local_hhmm(moon_ev.rise_jd_ut, details.utc_offset_hours),
            moonset: local_hhmm(moon_ev.set_jd_ut, details.utc_offset_hours),
        })
    }

    /// The Moon's position.
    pub fn moon(&self) -> &GrahaPosition {
        &self.positions[Graha::Chandra.index() as usize]
    }

    /// The timeline of one dasha system, if computed.
    pub fn dasha(&self, system: DashaSystem) -> Option<&DashaTimeline> {
        self.dashas.iter().find(|d| d.system == system)
    }
}

//! Sunrise, sunset, moonrise, and moonset.
//!
//! The Sun uses the closed-form sunrise equation on its low-precision
//! apparent longitude; the Moon uses the standard transit/hour-angle
//! refinement against interpolated equatorial coordinates, since its
//! parallax and fast motion defeat the closed form.

use jataka_ephem::{mean_obliquity_deg, moon_latitude_deg, moon_longitude_deg, normalize_360};
use jataka_time::{gmst_deg, jd_ut_to_tt};

use crate::util::wrap_pm180;

/// Standard refraction altitude for the solar limb at the horizon.
const SUN_H0_DEG: f64 = -0.833;

/// Net horizon altitude for the Moon: refraction against parallax.
const MOON_H0_DEG: f64 = 0.125;

/// Sidereal turn rate, degrees of hour angle per day.
const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647;

/// An observing site. Latitude north positive, longitude east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Rise and set instants for one body over one civil day.
///
/// `None` means the event does not occur that day (polar day or night,
/// or the Moon skipping a rise/set as it does roughly once a month).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiseEvent {
    pub rise_jd_ut: Option<f64>,
    pub set_jd_ut: Option<f64>,
}

/// Sunrise and sunset for the civil day starting at `jd_midnight_ut`.
///
/// # Formula
/// Sunrise equation on the Sun's low-precision apparent longitude:
/// equation of center from the mean anomaly, declination from the
/// ecliptic longitude, hour angle at altitude −0.833 deg.
pub fn sun_rise_set(jd_midnight_ut: f64, loc: &GeoLocation) -> RiseEvent {
    // The solar-cycle number anchors to the civil day's local noon
    // (midnight + 0.5, shifted by longitude); anchoring to the bare
    // midnight instant rounds a day low east of the prime meridian.
    let n =
        (jd_midnight_ut + 0.5 - 2_451_545.000_9 + loc.longitude_deg / 360.0).round();
    let j_star = 2_451_545.0 + 0.0009 + n - loc.longitude_deg / 360.0;

    let m = normalize_360(357.5291 + 0.985_600_28 * n);
    let m_rad = m.to_radians();
    let center =
        1.9148 * m_rad.sin() + 0.0200 * (2.0 * m_rad).sin() + 0.0003 * (3.0 * m_rad).sin();
    let lambda = normalize_360(m + center + 180.0 + 102.9372);
    let lambda_rad = lambda.to_radians();

    let j_transit = j_star + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * lambda_rad).sin();

    let sin_dec = lambda_rad.sin() * 23.44_f64.to_radians().sin();
    let dec = sin_dec.asin();
    let phi = loc.latitude_deg.to_radians();

    let cos_omega =
        (SUN_H0_DEG.to_radians().sin() - phi.sin() * sin_dec) / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_omega) {
        // Polar day or polar night.
        return RiseEvent::default();
    }
    let omega_deg = cos_omega.acos().to_degrees();

    RiseEvent {
        rise_jd_ut: Some(j_transit - omega_deg / 360.0),
        set_jd_ut: Some(j_transit + omega_deg / 360.0),
    }
}

/// Moon right ascension and declination in degrees at a TT epoch.
fn moon_ra_dec_deg(jd_tt: f64) -> (f64, f64) {
    let lon = moon_longitude_deg(jd_tt).to_radians();
    let lat = moon_latitude_deg(jd_tt).to_radians();
    let eps = mean_obliquity_deg(jd_tt).to_radians();
    let ra = f64::atan2(lon.sin() * eps.cos() - lat.tan() * eps.sin(), lon.cos());
    let dec = (lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin()).asin();
    (normalize_360(ra.to_degrees()), dec.to_degrees())
}

/// Linear interpolation of (RA, Dec) between two day samples, with the
/// RA delta wrapped so the 0/360 seam does not tear the track.
fn interp_ra_dec(a: (f64, f64), b: (f64, f64), frac: f64) -> (f64, f64) {
    let ra = normalize_360(a.0 + wrap_pm180(b.0 - a.0) * frac);
    let dec = a.1 + (b.1 - a.1) * frac;
    (ra, dec)
}

/// Altitude of a body in degrees given site, declination, hour angle.
fn altitude_deg(phi_rad: f64, dec_deg: f64, hour_angle_deg: f64) -> f64 {
    let dec = dec_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    (phi_rad.sin() * dec.sin() + phi_rad.cos() * dec.cos() * h.cos())
        .asin()
        .to_degrees()
}

/// Refine one event fraction (transit offset by +-H0) toward altitude
/// `MOON_H0_DEG`.
fn refine_moon_event(
    mut m: f64,
    jd_midnight_ut: f64,
    theta0: f64,
    samples: &[(f64, f64); 3],
    loc: &GeoLocation,
) -> Option<f64> {
    let phi = loc.latitude_deg.to_radians();
    for _ in 0..3 {
        m = m.rem_euclid(1.0);
        let theta = theta0 + SIDEREAL_RATE_DEG_PER_DAY * m;
        // Interpolate within today's bracket (samples 1 and 2 span the day).
        let (ra, dec) = interp_ra_dec(samples[1], samples[2], m);
        let h = wrap_pm180(theta + loc.longitude_deg - ra);
        let alt = altitude_deg(phi, dec, h);
        let dec_rad = dec.to_radians();
        let denom = 360.0 * dec_rad.cos() * phi.cos() * h.to_radians().sin();
        if denom.abs() < 1e-9 {
            return None;
        }
        m += (alt - MOON_H0_DEG) / denom;
    }
    if (0.0..1.0).contains(&m) {
        Some(jd_midnight_ut + m)
    } else {
        // The event slid into the neighbouring day; it does not occur
        // within this civil day.
        None
    }
}

/// Moonrise and moonset for the civil day starting at `jd_midnight_ut`.
///
/// The Moon can skip a rise or a set within a single civil day. When
/// that happens the missing event is borrowed from the adjacent day:
/// yesterday's event wins when it falls later in its own day than the
/// surviving event does in this one, otherwise tomorrow's is used.
pub fn moon_rise_set(jd_midnight_ut: f64, loc: &GeoLocation) -> RiseEvent {
    let today = moon_events_once(jd_midnight_ut, loc);
    if today.rise_jd_ut.is_some() && today.set_jd_ut.is_some() {
        return today;
    }
    let yesterday = moon_events_once(jd_midnight_ut - 1.0, loc);
    let tomorrow = moon_events_once(jd_midnight_ut + 1.0, loc);
    RiseEvent {
        rise_jd_ut: adjacent_day_event(
            today.rise_jd_ut,
            today.set_jd_ut,
            yesterday.rise_jd_ut,
            tomorrow.rise_jd_ut,
            jd_midnight_ut,
        ),
        set_jd_ut: adjacent_day_event(
            today.set_jd_ut,
            today.rise_jd_ut,
            yesterday.set_jd_ut,
            tomorrow.set_jd_ut,
            jd_midnight_ut,
        ),
    }
}

fn adjacent_day_event(
    event: Option<f64>,
    other: Option<f64>,
    yesterday: Option<f64>,
    tomorrow: Option<f64>,
    jd_midnight_ut: f64,
) -> Option<f64> {
    if event.is_some() {
        return event;
    }
    if let (Some(y), Some(o)) = (yesterday, other) {
        // Compare each event's fraction within its own civil day.
        if y - (jd_midnight_ut - 1.0) > o - jd_midnight_ut {
            return Some(y);
        }
    }
    tomorrow.or(yesterday)
}

/// Equatorial coordinates are sampled at the previous, current, and
/// next midnight and interpolated linearly; each event fraction is then
/// refined three times against the true altitude.
fn moon_events_once(jd_midnight_ut: f64, loc: &GeoLocation) -> RiseEvent {
    let samples = [
        moon_ra_dec_deg(jd_ut_to_tt(jd_midnight_ut - 1.0)),
        moon_ra_dec_deg(jd_ut_to_tt(jd_midnight_ut)),
        moon_ra_dec_deg(jd_ut_to_tt(jd_midnight_ut + 1.0)),
    ];
    let theta0 = gmst_deg(jd_midnight_ut);
    let phi = loc.latitude_deg.to_radians();

    let (ra0, dec0) = samples[1];
    let cos_h0 = (MOON_H0_DEG.to_radians().sin() - phi.sin() * dec0.to_radians().sin())
        / (phi.cos() * dec0.to_radians().cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        // Circumpolar or never rising at this latitude today.
        return RiseEvent::default();
    }
    let h0 = cos_h0.acos().to_degrees();

    let m_transit = (normalize_360(ra0 - loc.longitude_deg - theta0)) / 360.0;

    RiseEvent {
        rise_jd_ut: refine_moon_event(
            m_transit - h0 / 360.0,
            jd_midnight_ut,
            theta0,
            &samples,
            loc,
        ),
        set_jd_ut: refine_moon_event(
            m_transit + h0 / 360.0,
            jd_midnight_ut,
            theta0,
            &samples,
            loc,
        ),
    }
}

//! Geocentric ecliptic positions of the five classical planets.
//!
//! Heliocentric Keplerian elements (linear in time), Kepler-equation
//! solve, orbital-plane → ecliptic rotation, then subtraction of Earth's
//! heliocentric position. Earth uses the same element table with zero
//! inclination and node by definition.
//!
//! Source: Standish, "Keplerian elements for approximate positions of
//! the major planets" (JPL), valid 1800–2050.

use jataka_time::jd_tt_to_centuries;

use crate::kepler::eccentric_anomaly;
use crate::normalize_360;

/// The five classical planets computed from orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All element-table planets in traditional order.
pub const ALL_PLANETS: [Planet; 5] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

/// Geocentric ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetEcliptic {
    /// Geocentric ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Geocentric ecliptic latitude in degrees.
    pub latitude_deg: f64,
}

/// Keplerian elements at J2000 plus per-century rates.
///
/// Order: semi-major axis (AU), eccentricity, inclination (deg),
/// mean longitude (deg), longitude of perihelion (deg),
/// longitude of ascending node (deg).
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
}

const MERCURY: Elements = Elements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: Elements = Elements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARY: Elements = Elements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: Elements = Elements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: Elements = Elements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

impl Planet {
    fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Heliocentric rectangular ecliptic coordinates (AU) from elements.
fn heliocentric_xyz(el: &Elements, t_centuries: f64) -> [f64; 3] {
    let at = |pair: [f64; 2]| pair[0] + pair[1] * t_centuries;

    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let m = normalize_360(l - peri).to_radians();
    let w = (peri - node).to_radians();
    let om = node.to_radians();

    let big_e = eccentric_anomaly(m, e);

    // Position in the orbital plane, perihelion on +x.
    let xp = a * (big_e.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * big_e.sin();

    // Rotate by argument of perihelion, inclination, ascending node.
    let (sw, cw) = w.sin_cos();
    let (si, ci) = i.sin_cos();
    let (so, co) = om.sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric ecliptic longitude and latitude of a planet at a JD TT.
pub fn planet_position(planet: Planet, jd_tt: f64) -> PlanetEcliptic {
    let t = jd_tt_to_centuries(jd_tt);
    let p = heliocentric_xyz(planet.elements(), t);
    let e = heliocentric_xyz(&EARTH_MOON_BARY, t);

    let x = p[0] - e[0];
    let y = p[1] - e[1];
    let z = p[2] - e[2];

    let longitude_deg = normalize_360(y.atan2(x).to_degrees());
    let latitude_deg = z.atan2((x * x + y * y).sqrt()).to_degrees();
    PlanetEcliptic {
        longitude_deg,
        latitude_deg,
    }
}

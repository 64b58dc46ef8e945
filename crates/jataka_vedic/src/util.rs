//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Wrap an angle difference to (−180, 180] degrees.
pub fn wrap_pm180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Split a non-negative angle into degrees, minutes, seconds.
pub fn deg_to_dms(deg: f64) -> Dms {
    let total = deg.abs();
    let degrees = total.floor();
    let minutes_f = (total - degrees) * 60.0;
    let minutes = minutes_f.floor();
    let seconds = (minutes_f - minutes) * 60.0;
    Dms {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\u{b0}{:02}'{:05.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(0.0)).abs() < 1e-15);
    }

    #[test]
    fn wrap_symmetric() {
        assert!((wrap_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_pm180(180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn dms_split() {
        let dms = deg_to_dms(23.4392911);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 26);
        assert!((dms.seconds - 21.448).abs() < 0.01);
    }
}

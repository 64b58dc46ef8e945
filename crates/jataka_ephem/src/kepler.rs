//! Fixed-point Kepler equation solver.

/// Solve Kepler's equation `E = M + e·sin(E)` by fixed-point iteration.
///
/// Exactly 7 unconditional iterations, no convergence test. For
/// solar-system eccentricities (e < 0.21 among the bodies used here) the
/// residual after 7 iterations is far below the accuracy of the truncated
/// series feeding it, and the fixed count keeps the solver branch-free
/// and bit-reproducible.
///
/// `m_rad` is the mean anomaly in radians; returns the eccentric anomaly
/// in radians.
pub fn eccentric_anomaly(m_rad: f64, e: f64) -> f64 {
    let mut big_e = m_rad;
    for _ in 0..7 {
        big_e = m_rad + e * big_e.sin();
    }
    big_e
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_orbit() {
        // e = 0 → E = M exactly.
        for &m in &[0.0, 1.0, 3.0, 6.0] {
            assert!((eccentric_anomaly(m, 0.0) - m).abs() < 1e-15);
        }
    }

    #[test]
    fn satisfies_kepler_equation() {
        // Seven fixed-point passes converge to ~1e-9 at Mercury's
        // eccentricity, far tighter at the rest.
        for &(m, e) in &[(0.5, 0.0167), (2.0, 0.0934), (4.5, 0.2056)] {
            let big_e = eccentric_anomaly(m, e);
            let residual = big_e - e * big_e.sin() - m;
            assert!(residual.abs() < 1e-7, "M={m} e={e} residual={residual}");
        }
    }

    #[test]
    fn deterministic() {
        let a = eccentric_anomaly(1.2345, 0.0489);
        let b = eccentric_anomaly(1.2345, 0.0489);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

use crate::constants::{Day, Radian, DPI, JD};
use crate::error::RvError;

/// Principal value of an angle in radians, reduced to [0, 2π].
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Eccentric anomaly corresponding to a true anomaly `nu`, for eccentricity `ecc`.
pub fn true_to_eccentric_anomaly(nu: Radian, ecc: f64) -> Radian {
    2.0 * ((nu / 2.0).tan() * ((1.0 - ecc) / (1.0 + ecc)).sqrt()).atan()
}

/// Mean anomaly from eccentric anomaly (forward direction of Kepler's equation).
pub fn eccentric_to_mean_anomaly(ea: Radian, ecc: f64) -> Radian {
    ea - ecc * ea.sin()
}

fn check_orbit(per: Day, ecc: f64) -> Result<(), RvError> {
    if !(0.0..1.0).contains(&ecc) {
        return Err(RvError::InvalidEccentricity(ecc));
    }
    if per <= 0.0 {
        return Err(RvError::InvalidPeriod(per));
    }
    Ok(())
}

/// Mean anomaly swept between periastron and inferior conjunction.
///
/// The star is seen at inferior conjunction when the planet's true anomaly reaches
/// ν = π/2 − ω; the offset between the two epochs is M/2π orbital periods.
fn mean_anomaly_at_conjunction(ecc: f64, omega: Radian) -> Radian {
    let nu = std::f64::consts::FRAC_PI_2 - omega;
    let ea = true_to_eccentric_anomaly(nu, ecc);
    eccentric_to_mean_anomaly(ea, ecc)
}

/// Convert a time of periastron passage into a time of inferior conjunction.
///
/// Arguments
/// -----------------
/// * `tp`: time of periastron passage (same day scale as `per`).
/// * `per`: orbital period in days.
/// * `ecc`: orbital eccentricity, in `[0, 1)`.
/// * `omega`: argument of periastron of the star's orbit, radians.
///
/// Return
/// ----------
/// * The time of inferior conjunction, or an [`RvError`] for a non-physical orbit.
pub fn periastron_to_conjunction(
    tp: JD,
    per: Day,
    ecc: f64,
    omega: Radian,
) -> Result<JD, RvError> {
    check_orbit(per, ecc)?;
    Ok(tp + per / DPI * mean_anomaly_at_conjunction(ecc, omega))
}

/// Convert a time of inferior conjunction into a time of periastron passage.
///
/// Exact inverse of [`periastron_to_conjunction`] for the same `(per, ecc, omega)`.
pub fn conjunction_to_periastron(
    tc: JD,
    per: Day,
    ecc: f64,
    omega: Radian,
) -> Result<JD, RvError> {
    check_orbit(per, ecc)?;
    Ok(tc - per / DPI * mean_anomaly_at_conjunction(ecc, omega))
}

#[cfg(test)]
mod test_kepler {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_principal_angle() {
        assert_relative_eq!(principal_angle(3.0 * PI), PI);
        assert_relative_eq!(principal_angle(-FRAC_PI_2), 1.5 * PI);
        assert_relative_eq!(principal_angle(0.25), 0.25);
    }

    #[test]
    fn test_conjunction_at_periastron_when_omega_is_quadrature() {
        // omega = π/2 puts periastron on the line of sight: tc == tp for any eccentricity
        let tp = 2455848.0;
        let tc = periastron_to_conjunction(tp, 1917.2, 0.028, FRAC_PI_2).unwrap();
        assert_relative_eq!(tc, tp, epsilon = 1e-9);
    }

    #[test]
    fn test_circular_orbit_quarter_period_offset() {
        // e = 0, omega = 0: conjunction trails periastron by a quarter period
        let tc = periastron_to_conjunction(100.0, 40.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(tc, 110.0, epsilon = 1e-12);
    }

    #[test]
    fn test_periastron_conjunction_roundtrip() {
        let (per, ecc, omega) = (5768.0, 0.054, 3.653);
        let tp = 2460488.0;
        let tc = periastron_to_conjunction(tp, per, ecc, omega).unwrap();
        let back = conjunction_to_periastron(tc, per, ecc, omega).unwrap();
        assert_relative_eq!(back, tp, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_orbit_rejected() {
        assert_eq!(
            periastron_to_conjunction(0.0, 10.0, 1.2, 0.0),
            Err(RvError::InvalidEccentricity(1.2))
        );
        assert_eq!(
            conjunction_to_periastron(0.0, -1.0, 0.1, 0.0),
            Err(RvError::InvalidPeriod(-1.0))
        );
    }
}

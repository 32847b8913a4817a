//! # Orbital parameterizations and basis conversion
//!
//! A fitting engine optimizes over one of several equivalent sets of per-planet
//! orbital parameters. Initial guesses are usually declared in the human-convenient
//! `per tp e w k` set and re-expressed in a better-conditioned fitting basis such as
//! `per tc secosw sesinw k` before the fit.
//!
//! ## Overview
//!
//! This module provides:
//! - [`Basis`], the supported parameterizations, parsed from and displayed as their
//!   conventional space-joined name strings (`"per tp e w k"`, …).
//! - [`Parameters::to_basis`], a deterministic re-expression of a whole container in
//!   another basis. Per-planet terms are transformed; `dvdt`, `curv`, and the
//!   per-instrument gamma/jitter entries pass through unchanged; vary flags carry
//!   over slot-wise to the corresponding target keys.
//!
//! ## Units & Conventions
//!
//! - `per` in days, `tp`/`tc` in the dataset's day scale, `w` in **radians**
//!   (argument of periastron of the star's orbit), `k` in m/s.
//! - `secosw`/`sesinw` are √e·cos ω and √e·sin ω; `ecosw`/`esinw` are e·cos ω and
//!   e·sin ω. Reconstruction of ω uses quadrant-correct `atan2` and treats a
//!   near-circular orbit (e below [`ECC_EPS`]) as ω = 0.
//!
//! ## See also
//! ------------
//! * [`crate::kepler`] – periastron-time ↔ conjunction-time transforms.
//! * [`Parameters`] – the named-parameter container being converted.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{Day, Radian, ECC_EPS, JD};
use crate::error::RvError;
use crate::kepler::{conjunction_to_periastron, periastron_to_conjunction};
use crate::parameters::{Parameter, Parameters};

/// A named set of five per-planet orbital parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// `per tp e w k` — period, time of periastron, eccentricity, argument of
    /// periastron, semi-amplitude. The usual input basis.
    PerTpEWK,
    /// `per tc e w k` — as above with the time of inferior conjunction.
    PerTcEWK,
    /// `per tc secosw sesinw k` — √e·cos ω / √e·sin ω pair. The usual fitting basis.
    PerTcSecoswSesinwK,
    /// `per tc ecosw esinw k` — e·cos ω / e·sin ω pair.
    PerTcEcoswEsinwK,
}

impl Basis {
    /// The conventional space-joined name of this basis.
    pub const fn name(self) -> &'static str {
        match self {
            Basis::PerTpEWK => "per tp e w k",
            Basis::PerTcEWK => "per tc e w k",
            Basis::PerTcSecoswSesinwK => "per tc secosw sesinw k",
            Basis::PerTcEcoswEsinwK => "per tc ecosw esinw k",
        }
    }

    /// Key stems of the five per-planet terms, in declaration order.
    /// Full keys append the planet number: `per1`, `secosw2`, …
    pub const fn planet_stems(self) -> [&'static str; 5] {
        match self {
            Basis::PerTpEWK => ["per", "tp", "e", "w", "k"],
            Basis::PerTcEWK => ["per", "tc", "e", "w", "k"],
            Basis::PerTcSecoswSesinwK => ["per", "tc", "secosw", "sesinw", "k"],
            Basis::PerTcEcoswEsinwK => ["per", "tc", "ecosw", "esinw", "k"],
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Basis {
    type Err = RvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "per tp e w k" => Ok(Basis::PerTpEWK),
            "per tc e w k" => Ok(Basis::PerTcEWK),
            "per tc secosw sesinw k" => Ok(Basis::PerTcSecoswSesinwK),
            "per tc ecosw esinw k" => Ok(Basis::PerTcEcoswEsinwK),
            other => Err(RvError::UnknownBasis(other.to_string())),
        }
    }
}

/// Canonical per-planet orbit used as the conversion pivot.
/// Only [`Basis::PerTpEWK`] needs a time transform on the way in or out.
struct PlanetOrbit {
    per: Day,
    tc: JD,
    ecc: f64,
    omega: Radian,
    k: f64,
}

fn check_eccentricity(ecc: f64) -> Result<f64, RvError> {
    if !(0.0..1.0).contains(&ecc) {
        return Err(RvError::InvalidEccentricity(ecc));
    }
    Ok(ecc)
}

/// Reconstruct ω from a (cos-like, sin-like) pair sharing a non-negative common factor.
fn omega_from_pair(cos_like: f64, sin_like: f64, ecc: f64) -> Radian {
    if ecc < ECC_EPS {
        0.0
    } else {
        sin_like.atan2(cos_like)
    }
}

fn decompose(basis: Basis, v: [f64; 5]) -> Result<PlanetOrbit, RvError> {
    let [per, time, third, fourth, k] = v;
    let (tc, ecc, omega) = match basis {
        Basis::PerTpEWK => {
            let ecc = check_eccentricity(third)?;
            let tc = periastron_to_conjunction(time, per, ecc, fourth)?;
            (tc, ecc, fourth)
        }
        Basis::PerTcEWK => (time, check_eccentricity(third)?, fourth),
        Basis::PerTcSecoswSesinwK => {
            let ecc = check_eccentricity(third.powi(2) + fourth.powi(2))?;
            (time, ecc, omega_from_pair(third, fourth, ecc))
        }
        Basis::PerTcEcoswEsinwK => {
            let ecc = check_eccentricity(third.hypot(fourth))?;
            (time, ecc, omega_from_pair(third, fourth, ecc))
        }
    };
    Ok(PlanetOrbit {
        per,
        tc,
        ecc,
        omega,
        k,
    })
}

fn compose(basis: Basis, orbit: &PlanetOrbit) -> Result<[f64; 5], RvError> {
    let PlanetOrbit {
        per,
        tc,
        ecc,
        omega,
        k,
    } = *orbit;
    Ok(match basis {
        Basis::PerTpEWK => {
            let tp = conjunction_to_periastron(tc, per, ecc, omega)?;
            [per, tp, ecc, omega, k]
        }
        Basis::PerTcEWK => [per, tc, ecc, omega, k],
        Basis::PerTcSecoswSesinwK => {
            let se = ecc.sqrt();
            [per, tc, se * omega.cos(), se * omega.sin(), k]
        }
        Basis::PerTcEcoswEsinwK => [per, tc, ecc * omega.cos(), ecc * omega.sin(), k],
    })
}

impl Parameters {
    /// Re-express this container in `target`.
    ///
    /// Per-planet terms are transformed through the canonical orbit; every other entry
    /// (trend terms, per-instrument offsets and jitters) is copied verbatim. The vary
    /// flag of each per-planet term carries over to the same slot of the target basis
    /// (`tp1` → `tc1`, `e2` → `secosw2`, …).
    ///
    /// Return
    /// ----------
    /// * A new container in `target`, or an [`RvError`] if a per-planet key is missing
    ///   or an orbit is non-physical (e ∉ [0, 1), per ≤ 0).
    pub fn to_basis(&self, target: Basis) -> Result<Parameters, RvError> {
        if target == self.basis() {
            return Ok(self.clone());
        }

        let src_stems = self.basis().planet_stems();
        let tgt_stems = target.planet_stems();
        let mut out = Parameters::new(self.num_planets(), target);
        let mut planet_keys = HashSet::new();

        for planet in 1..=self.num_planets() {
            let mut values = [0.0; 5];
            let mut flags = [true; 5];
            for (slot, stem) in src_stems.iter().enumerate() {
                let key = format!("{stem}{planet}");
                let param = self.get(&key)?;
                values[slot] = param.value;
                flags[slot] = param.vary;
                planet_keys.insert(key);
            }

            let orbit = decompose(self.basis(), values)?;
            let converted = compose(target, &orbit)?;
            for (slot, stem) in tgt_stems.iter().enumerate() {
                out.insert(
                    format!("{stem}{planet}"),
                    Parameter {
                        value: converted[slot],
                        vary: flags[slot],
                    },
                );
            }
        }

        for (key, param) in self.iter() {
            if !planet_keys.contains(key) {
                out.insert(key.clone(), *param);
            }
        }
        Ok(out)
    }
}

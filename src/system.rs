//! # System setup: the configuration unit a fitting driver consumes
//!
//! This module defines the [`SystemSetup`] struct, the central façade that wires together:
//!
//! 1. **Dataset metadata** — star name, planet count, instrument labels, day-scale zero
//!    point, planet-letter mapping.
//! 2. **Initial guesses** — a [`Parameters`] container expressed in the fitting basis.
//! 3. **Prior constraints** — the [`Prior`] list handed to the engine.
//! 4. **Stellar metadata** — mass and its uncertainty, when known.
//! 5. **Reference epoch** — `time_base`, the abscissa of the slope/curvature terms.
//!
//! [`SystemSetup::validate`] runs the configuration-integrity checks a driver relies on:
//! every declared instrument has its gamma and jitter entries, the container is fully
//! populated for its basis, planet letters cover every planet, and every prior
//! references keys that exist.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::constants::{SolarMass, GAMMA_PREFIX, JITTER_PREFIX, JD};
use crate::error::RvError;
use crate::parameters::Parameters;
use crate::priors::Prior;
use crate::time::{jd_to_calendar, truncated_to_jd};

/// Stellar metadata: mass and its uncertainty, in solar masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stellar {
    pub mass: SolarMass,
    pub mass_err: SolarMass,
}

/// Complete configuration of one system's RV fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSetup {
    pub starname: String,
    pub num_planets: usize,
    /// Instrument labels with distinct velocity zero points; order only affects
    /// display and grouping in fit output.
    pub instruments: Vec<String>,
    pub fitting_basis: Basis,
    /// Zero point of the dataset's truncated day scale (times are t − bjd0).
    pub bjd0: JD,
    /// Display letter of each planet, keyed by planet number (1-based).
    pub planet_letters: HashMap<usize, char>,
    /// Initial guesses, expressed in `fitting_basis`.
    pub params: Parameters,
    pub priors: Vec<Prior>,
    pub stellar: Option<Stellar>,
    /// Abscissa of the slope and curvature terms, on the dataset's day scale.
    pub time_base: JD,
}

impl SystemSetup {
    /// Configuration-integrity check.
    ///
    /// Verifies that:
    /// - the container is expressed in `fitting_basis` for `num_planets` planets,
    /// - every declared instrument has `gamma_<name>` and `jit_<name>` entries,
    /// - the container holds exactly the `5*nplanets + 2 + 2*ntels` expected keys,
    /// - every planet `1..=num_planets` has a display letter,
    /// - every prior is well-formed and references existing keys.
    pub fn validate(&self) -> Result<(), RvError> {
        if self.params.basis() != self.fitting_basis {
            return Err(RvError::BasisMismatch {
                expected: self.fitting_basis.to_string(),
                found: self.params.basis().to_string(),
            });
        }
        if self.params.num_planets() != self.num_planets {
            return Err(RvError::ParameterCountMismatch {
                expected: self.num_planets,
                found: self.params.num_planets(),
            });
        }

        for instrument in &self.instruments {
            for prefix in [GAMMA_PREFIX, JITTER_PREFIX] {
                let key = format!("{prefix}{instrument}");
                if !self.params.contains(&key) {
                    return Err(RvError::MissingInstrumentParameter {
                        instrument: instrument.clone(),
                        key,
                    });
                }
            }
        }

        let expected = self.params.canonical_keys(&self.instruments);
        for key in &expected {
            self.params.get(key)?;
        }
        if self.params.len() != expected.len() {
            return Err(RvError::ParameterCountMismatch {
                expected: expected.len(),
                found: self.params.len(),
            });
        }

        for planet in 1..=self.num_planets {
            if !self.planet_letters.contains_key(&planet) {
                return Err(RvError::MissingPlanetLetter(planet));
            }
        }

        for prior in &self.priors {
            prior.validate_against(&self.params)?;
        }
        Ok(())
    }

    /// Display letters in planet order, e.g. `"b, c"`.
    pub fn letters(&self) -> String {
        (1..=self.num_planets)
            .filter_map(|planet| self.planet_letters.get(&planet))
            .join(", ")
    }
}

impl fmt::Display for SystemSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {}-planet fit ({}) in basis {:?}",
            self.starname,
            self.num_planets,
            self.letters(),
            self.fitting_basis.name()
        )?;
        writeln!(f, "instruments: {}", self.instruments.iter().join(", "))?;
        writeln!(
            f,
            "time base: {} ({})",
            self.time_base,
            jd_to_calendar(truncated_to_jd(self.time_base, self.bjd0))
        )?;
        if let Some(stellar) = &self.stellar {
            writeln!(f, "stellar mass: {} +/- {} Msun", stellar.mass, stellar.mass_err)?;
        }
        for prior in &self.priors {
            writeln!(f, "prior: {prior}")?;
        }
        Ok(())
    }
}

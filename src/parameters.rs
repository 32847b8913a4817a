//! # Named-parameter container
//!
//! This module defines [`Parameter`] and [`Parameters`], the container a fitting engine
//! consumes: named float entries, each with a boolean **vary** flag marking it free or
//! held fixed during the fit.
//!
//! ## Key scheme
//!
//! For an `nplanets` system observed with a set of instruments, a fully-populated
//! container holds:
//!
//! - five orbital terms per planet, named `<stem><planet>` with the stems given by the
//!   container's [`Basis`] (e.g. `per1`, `tp1`, `e1`, `w1`, `k1`),
//! - the velocity trend terms `dvdt` and `curv`,
//! - one zero point `gamma_<instrument>` and one jitter `jit_<instrument>` per
//!   instrument,
//!
//! for `5*nplanets + 2 + 2*ntels` entries in total.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::constants::{CURV_KEY, DVDT_KEY, GAMMA_PREFIX, JITTER_PREFIX};
use crate::error::RvError;

/// A single named fit parameter: a value and a vary flag.
///
/// Parameters are free by default; a fixed parameter keeps its value during fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: f64,
    pub vary: bool,
}

impl Parameter {
    /// A free parameter initialized at `value`.
    pub fn new(value: f64) -> Self {
        Parameter { value, vary: true }
    }

    /// A parameter held fixed at `value`.
    pub fn fixed(value: f64) -> Self {
        Parameter { value, vary: false }
    }
}

/// Container of named parameters for an `num_planets` system in a given [`Basis`].
///
/// Entries are keyed by name (`per1`, `tc2`, `gamma_HARPS-pre`, …). Lookup of a key
/// that was never inserted is an error, not a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    num_planets: usize,
    basis: Basis,
    entries: HashMap<String, Parameter>,
}

impl Parameters {
    /// An empty container for `num_planets` planets, expressed in `basis`.
    pub fn new(num_planets: usize, basis: Basis) -> Self {
        Parameters {
            num_planets,
            basis,
            entries: HashMap::new(),
        }
    }

    pub fn num_planets(&self) -> usize {
        self.num_planets
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, param: Parameter) {
        self.entries.insert(key.into(), param);
    }

    /// Look up an entry by name.
    pub fn get(&self, key: &str) -> Result<&Parameter, RvError> {
        self.entries
            .get(key)
            .ok_or_else(|| RvError::UnknownParameter(key.to_string()))
    }

    /// Value of the entry named `key`.
    pub fn value(&self, key: &str) -> Result<f64, RvError> {
        Ok(self.get(key)?.value)
    }

    /// Value of the per-planet entry `<stem><planet>` (planets are numbered from 1).
    pub fn planet_value(&self, stem: &str, planet: usize) -> Result<f64, RvError> {
        self.value(&format!("{stem}{planet}"))
    }

    /// Mark the entry named `key` as free (`vary = true`) or fixed.
    pub fn set_vary(&mut self, key: &str, vary: bool) -> Result<(), RvError> {
        let param = self
            .entries
            .get_mut(key)
            .ok_or_else(|| RvError::UnknownParameter(key.to_string()))?;
        param.vary = vary;
        Ok(())
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Parameter)> {
        self.entries.iter()
    }

    /// The keys a fully-populated container holds, in display order: per-planet terms
    /// in basis order, then `dvdt` and `curv`, then gamma/jitter per instrument.
    pub fn canonical_keys(&self, instruments: &[String]) -> Vec<String> {
        let mut keys = Vec::with_capacity(5 * self.num_planets + 2 + 2 * instruments.len());
        for planet in 1..=self.num_planets {
            for stem in self.basis.planet_stems() {
                keys.push(format!("{stem}{planet}"));
            }
        }
        keys.push(DVDT_KEY.to_string());
        keys.push(CURV_KEY.to_string());
        for instrument in instruments {
            keys.push(format!("{GAMMA_PREFIX}{instrument}"));
        }
        for instrument in instruments {
            keys.push(format!("{JITTER_PREFIX}{instrument}"));
        }
        keys
    }
}

#[cfg(test)]
mod test_parameters {
    use super::*;

    #[test]
    fn test_insert_get_and_vary() {
        let mut params = Parameters::new(1, Basis::PerTpEWK);
        params.insert("per1", Parameter::new(1917.2));
        params.insert("dvdt", Parameter::fixed(0.0));

        assert_eq!(params.value("per1").unwrap(), 1917.2);
        assert!(params.get("per1").unwrap().vary);
        assert!(!params.get("dvdt").unwrap().vary);

        params.set_vary("per1", false).unwrap();
        assert!(!params.get("per1").unwrap().vary);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let params = Parameters::new(1, Basis::PerTpEWK);
        assert_eq!(
            params.value("k1"),
            Err(RvError::UnknownParameter("k1".to_string()))
        );
        assert_eq!(
            Parameters::new(1, Basis::PerTpEWK).set_vary("nope", true),
            Err(RvError::UnknownParameter("nope".to_string()))
        );
    }

    #[test]
    fn test_canonical_key_order() {
        let params = Parameters::new(2, Basis::PerTcSecoswSesinwK);
        let instruments = vec!["HIRES".to_string(), "CARMENES".to_string()];
        let keys = params.canonical_keys(&instruments);

        assert_eq!(keys.len(), 5 * 2 + 2 + 2 * 2);
        assert_eq!(keys[0], "per1");
        assert_eq!(keys[1], "tc1");
        assert_eq!(keys[2], "secosw1");
        assert_eq!(keys[5], "per2");
        assert_eq!(keys[10], "dvdt");
        assert_eq!(keys[11], "curv");
        assert_eq!(keys[12], "gamma_HIRES");
        assert_eq!(keys[15], "jit_CARMENES");
    }
}

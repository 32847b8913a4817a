//! # Radial-velocity dataset reader
//!
//! Utilities to load a **whitespace-delimited RV dataset** into an ordered table of
//! [`RvObservation`] rows consumable by a fitting driver.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A small error type [`ParseRvError`] describing row-level parsing failures.
//! - A crate-internal row parser (`from_row`) that converts one data line into an
//!   [`RvObservation`].
//! - [`RvSet`], the ordered, immutable collection of rows, with the derived
//!   quantities a setup needs (instrument labels, reference epoch).
//!
//! ## File format
//! -----------------
//! - Plain text, columns separated by any run of whitespace.
//! - The **first row is skipped** (header), blank rows are ignored.
//! - Four columns in fixed order: `time mnvel errvel tel` — epoch (Julian-date-like
//!   float), velocity (m/s), velocity uncertainty (m/s), instrument label (string).
//! - Rows are kept verbatim, in file order; no row is ever mutated.
//!
//! ## Error Handling
//! -----------------
//! Row failures are wrapped into [`RvError::RvFileParsing`] with a [`ParseRvError`]
//! payload carrying the offending field. A file with no data rows at all is an error.

use camino::Utf8Path;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MetersPerSecond, JD};
use crate::error::RvError;

/// Row-level parsing errors for RV data files.
///
/// Variants
/// -----------------
/// * `TooFewColumns` – The row has fewer than four whitespace-separated fields.
/// * `InvalidFloat` – A numeric field (`time`, `mnvel`, `errvel`) failed to parse;
///   the payload carries the column name and the offending token.
#[derive(Error, Debug, PartialEq)]
pub enum ParseRvError {
    #[error("Row has {found} columns, expected 4 (time mnvel errvel tel)")]
    TooFewColumns { found: usize },
    #[error("Invalid {column} value: {value:?}")]
    InvalidFloat { column: &'static str, value: String },
}

/// One measured radial velocity: epoch, velocity, uncertainty, instrument label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RvObservation {
    pub time: JD,
    pub vel: MetersPerSecond,
    pub err: MetersPerSecond,
    pub instrument: String,
}

/// Parse one data row into an [`RvObservation`] (crate-private helper).
fn from_row(row: &str) -> Result<RvObservation, ParseRvError> {
    let fields: Vec<&str> = row.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParseRvError::TooFewColumns {
            found: fields.len(),
        });
    }

    let float_field = |column: &'static str, value: &str| -> Result<f64, ParseRvError> {
        value.parse().map_err(|_| ParseRvError::InvalidFloat {
            column,
            value: value.to_string(),
        })
    };

    Ok(RvObservation {
        time: float_field("time", fields[0])?,
        vel: float_field("mnvel", fields[1])?,
        err: float_field("errvel", fields[2])?,
        instrument: fields[3].to_string(),
    })
}

/// Ordered, non-empty collection of RV observations loaded from a dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RvSet {
    observations: Vec<RvObservation>,
}

impl RvSet {
    /// Load a whitespace-delimited RV dataset from `path`.
    ///
    /// The first row is skipped as a header and blank rows are ignored; every other
    /// row must parse. Row order is preserved.
    ///
    /// Arguments
    /// -----------------
    /// * `path` – Path to the dataset file.
    ///
    /// Return
    /// ----------
    /// * The loaded [`RvSet`], or an [`RvError`] on I/O failure, malformed rows, or
    ///   a file with no data rows.
    pub fn from_file(path: &Utf8Path) -> Result<Self, RvError> {
        let content = std::fs::read_to_string(path)?;
        let observations = content
            .lines()
            .skip(1)
            .filter(|row| !row.trim().is_empty())
            .map(|row| from_row(row).map_err(RvError::RvFileParsing))
            .collect::<Result<Vec<_>, _>>()?;

        if observations.is_empty() {
            return Err(RvError::EmptyRvFile(path.to_string()));
        }
        Ok(RvSet { observations })
    }

    /// Build a set from rows already in memory. Errors on an empty collection.
    pub fn from_observations(observations: Vec<RvObservation>) -> Result<Self, RvError> {
        if observations.is_empty() {
            return Err(RvError::EmptyRvFile("<in-memory>".to_string()));
        }
        Ok(RvSet { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RvObservation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[RvObservation] {
        &self.observations
    }

    /// Unique instrument labels, in order of first appearance.
    pub fn instruments(&self) -> Vec<String> {
        self.observations
            .iter()
            .map(|obs| obs.instrument.clone())
            .unique()
            .collect()
    }

    /// Rows measured by `instrument`, in file order.
    pub fn select_instrument(&self, instrument: &str) -> Vec<&RvObservation> {
        self.observations
            .iter()
            .filter(|obs| obs.instrument == instrument)
            .collect()
    }

    /// Midpoint of the time baseline, `(min(time) + max(time)) / 2`.
    ///
    /// The abscissa the slope and curvature terms are referenced to.
    pub fn time_base(&self) -> JD {
        match self.observations.iter().map(|obs| obs.time).minmax() {
            MinMaxResult::MinMax(lo, hi) => (lo + hi) / 2.0,
            MinMaxResult::OneElement(t) => t,
            MinMaxResult::NoElements => f64::NAN,
        }
    }
}

impl std::ops::Index<usize> for RvSet {
    type Output = RvObservation;

    fn index(&self, index: usize) -> &RvObservation {
        &self.observations[index]
    }
}

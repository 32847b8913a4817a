use thiserror::Error;

use crate::velocities::ParseRvError;

#[derive(Error, Debug, PartialEq)]
pub enum RvError {
    #[error("Unknown fitting basis: {0:?}")]
    UnknownBasis(String),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Eccentricity out of range [0, 1): {0}")]
    InvalidEccentricity(f64),

    #[error("Non-positive orbital period: {0}")]
    InvalidPeriod(f64),

    #[error("Unable to perform file operation: {0}")]
    IoError(String),

    #[error("Error parsing RV data file: {0}")]
    RvFileParsing(ParseRvError),

    #[error("RV data file contains no data rows: {0}")]
    EmptyRvFile(String),

    #[error("Instrument {instrument:?} has no {key} entry in the parameter container")]
    MissingInstrumentParameter { instrument: String, key: String },

    #[error("Parameter container holds {found} entries, expected {expected}")]
    ParameterCountMismatch { expected: usize, found: usize },

    #[error("Parameters are expressed in basis {found:?}, expected {expected:?}")]
    BasisMismatch { expected: String, found: String },

    #[error("Invalid hard bounds on {param}: min {minval} exceeds max {maxval}")]
    InvalidPriorBounds {
        param: String,
        minval: f64,
        maxval: f64,
    },

    #[error("Gaussian prior on {param} has non-positive width {sigma}")]
    InvalidPriorWidth { param: String, sigma: f64 },

    #[error("No letter assigned to planet {0}")]
    MissingPlanetLetter(usize),
}

impl From<std::io::Error> for RvError {
    fn from(err: std::io::Error) -> Self {
        RvError::IoError(err.to_string())
    }
}

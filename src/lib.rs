//! `rvfit` — configuration primitives for radial-velocity orbital fitting.
//!
//! The crate owns everything a fit setup declares before an engine runs: a
//! named-parameter container with vary flags ([`Parameters`]), conversions between
//! orbital parameterizations ([`Basis`]), a whitespace-delimited RV dataset reader
//! ([`RvSet`]), prior-constraint descriptors ([`Prior`]), and the [`SystemSetup`]
//! façade tying them together, with the GJ 849 two-planet configuration as the
//! shipped example ([`gj849`]).

pub mod basis;
pub mod constants;
pub mod error;
pub mod gj849;
pub mod kepler;
pub mod parameters;
pub mod priors;
pub mod system;
pub mod time;
pub mod velocities;

pub use basis::Basis;
pub use error::RvError;
pub use parameters::{Parameter, Parameters};
pub use priors::Prior;
pub use system::{Stellar, SystemSetup};
pub use velocities::{RvObservation, RvSet};

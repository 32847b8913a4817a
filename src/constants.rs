//! # Constants and type definitions for rvfit
//!
//! This module centralizes the **conversion factors**, **conventions**, and **common type
//! definitions** used throughout the `rvfit` library.
//!
//! ## Overview
//!
//! - Time-scale offsets (JD ↔ MJD, the conventional BJD − 2450000 zero point of RV datasets)
//! - Core type aliases used across the crate
//! - Parameter-key prefixes for per-instrument terms
//!
//! These definitions are used by the parameter container, the basis conversions, and the
//! RV data reader.

// -------------------------------------------------------------------------------------------------
// Conventions and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Conventional zero point of truncated barycentric Julian dates in RV datasets
/// (times are commonly tabulated as BJD − 2450000)
pub const BJD0_CONVENTION: f64 = 2_450_000.0;

/// Numerical epsilon below which an orbit is treated as circular
pub const ECC_EPS: f64 = 1e-10;

/// Default upper limit enforced by the eccentricity prior
pub const ECC_HARD_LIMIT: f64 = 0.99;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Epoch in Julian-date-like days (JD, BJD, or BJD − offset; datasets fix the convention)
pub type JD = f64;
/// Duration in days
pub type Day = f64;
/// Velocity in meters per second
pub type MetersPerSecond = f64;
/// Angle in radians
pub type Radian = f64;
/// Stellar mass in solar masses
pub type SolarMass = f64;

// -------------------------------------------------------------------------------------------------
// Parameter-key conventions
// -------------------------------------------------------------------------------------------------

/// Key prefix of per-instrument velocity zero points (`gamma_<instrument>`)
pub const GAMMA_PREFIX: &str = "gamma_";

/// Key prefix of per-instrument jitter terms (`jit_<instrument>`)
pub const JITTER_PREFIX: &str = "jit_";

/// Key of the linear velocity trend term
pub const DVDT_KEY: &str = "dvdt";

/// Key of the velocity curvature term
pub const CURV_KEY: &str = "curv";

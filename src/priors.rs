//! # Prior constraints
//!
//! This module provides the **prior descriptors** a setup hands to the fitting engine.
//! A [`Prior`] names a parameter (or a whole family, such as every eccentricity) and a
//! bound or distribution shape; the setup only assembles and validates them, the
//! engine evaluates them.
//!
//! ## Public API
//!
//! ### [`Prior`]
//! The supported constraint shapes:
//!
//! - `Prior::Eccentricity` – keeps every planet's eccentricity below the hard limit
//!   ([`ECC_HARD_LIMIT`]).
//! - `Prior::PositiveK` – keeps every semi-amplitude positive.
//! - `Prior::HardBounds` – uniform bound `[minval, maxval]` on one named parameter.
//! - `Prior::Gaussian` – normal prior `N(mu, sigma)` on one named parameter.
//!
//! ### Key expansion
//!
//! The family priors constrain different container keys depending on the basis: the
//! eccentricity prior binds `e<n>` in an `e w` basis but the `secosw<n>`/`sesinw<n>`
//! pair in the sqrt-e fitting basis. [`Prior::param_names`] performs that expansion,
//! and [`Prior::validate_against`] checks every expanded key exists in a container.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::basis::Basis;
use crate::constants::ECC_HARD_LIMIT;
use crate::error::RvError;
use crate::parameters::Parameters;

/// A single prior constraint handed to the fitting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prior {
    /// Keeps the eccentricity of every planet below [`ECC_HARD_LIMIT`].
    Eccentricity { num_planets: usize },
    /// Keeps the semi-amplitude of every planet positive.
    PositiveK { num_planets: usize },
    /// Uniform hard bound on one named parameter.
    HardBounds {
        param: String,
        minval: f64,
        maxval: f64,
    },
    /// Gaussian prior on one named parameter.
    Gaussian { param: String, mu: f64, sigma: f64 },
}

/// Container key stems carrying the eccentricity information of a basis.
fn eccentricity_stems(basis: Basis) -> &'static [&'static str] {
    match basis {
        Basis::PerTpEWK | Basis::PerTcEWK => &["e"],
        Basis::PerTcSecoswSesinwK => &["secosw", "sesinw"],
        Basis::PerTcEcoswEsinwK => &["ecosw", "esinw"],
    }
}

impl Prior {
    pub fn hard_bounds(param: impl Into<String>, minval: f64, maxval: f64) -> Self {
        Prior::HardBounds {
            param: param.into(),
            minval,
            maxval,
        }
    }

    pub fn gaussian(param: impl Into<String>, mu: f64, sigma: f64) -> Self {
        Prior::Gaussian {
            param: param.into(),
            mu,
            sigma,
        }
    }

    /// The container keys this prior constrains, for parameters expressed in `basis`.
    pub fn param_names(&self, basis: Basis) -> Vec<String> {
        match self {
            Prior::Eccentricity { num_planets } => (1..=*num_planets)
                .flat_map(|planet| {
                    eccentricity_stems(basis)
                        .iter()
                        .map(move |stem| format!("{stem}{planet}"))
                })
                .collect(),
            Prior::PositiveK { num_planets } => {
                (1..=*num_planets).map(|planet| format!("k{planet}")).collect()
            }
            Prior::HardBounds { param, .. } | Prior::Gaussian { param, .. } => {
                vec![param.clone()]
            }
        }
    }

    /// Check this prior is well-formed and only references keys present in `params`.
    pub fn validate_against(&self, params: &Parameters) -> Result<(), RvError> {
        match self {
            Prior::HardBounds {
                param,
                minval,
                maxval,
            } if minval > maxval => {
                return Err(RvError::InvalidPriorBounds {
                    param: param.clone(),
                    minval: *minval,
                    maxval: *maxval,
                });
            }
            Prior::Gaussian { param, sigma, .. } if *sigma <= 0.0 => {
                return Err(RvError::InvalidPriorWidth {
                    param: param.clone(),
                    sigma: *sigma,
                });
            }
            _ => {}
        }

        for name in self.param_names(params.basis()) {
            params.get(&name)?;
        }
        Ok(())
    }
}

impl fmt::Display for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prior::Eccentricity { .. } => {
                write!(f, "Eccentricity constrained to be < {ECC_HARD_LIMIT}")
            }
            Prior::PositiveK { .. } => write!(f, "K constrained to be > 0"),
            Prior::HardBounds {
                param,
                minval,
                maxval,
            } => write!(f, "Bounded between {minval} and {maxval} on parameter {param}"),
            Prior::Gaussian { param, mu, sigma } => {
                write!(f, "Gaussian prior on {param}, mu={mu}, sigma={sigma}")
            }
        }
    }
}

#[cfg(test)]
mod test_priors {
    use super::*;
    use crate::parameters::Parameter;

    fn fitting_params() -> Parameters {
        let mut params = Parameters::new(2, Basis::PerTcSecoswSesinwK);
        for planet in 1..=2 {
            for stem in Basis::PerTcSecoswSesinwK.planet_stems() {
                params.insert(format!("{stem}{planet}"), Parameter::new(0.1));
            }
        }
        params.insert("jit_CARMENES", Parameter::new(2.4));
        params
    }

    #[test]
    fn test_eccentricity_prior_expands_per_basis() {
        let prior = Prior::Eccentricity { num_planets: 2 };
        assert_eq!(
            prior.param_names(Basis::PerTpEWK),
            vec!["e1".to_string(), "e2".to_string()]
        );
        assert_eq!(
            prior.param_names(Basis::PerTcSecoswSesinwK),
            vec!["secosw1", "sesinw1", "secosw2", "sesinw2"]
        );
    }

    #[test]
    fn test_validation_against_container() {
        let params = fitting_params();
        Prior::Eccentricity { num_planets: 2 }
            .validate_against(&params)
            .unwrap();
        Prior::PositiveK { num_planets: 2 }
            .validate_against(&params)
            .unwrap();
        Prior::hard_bounds("jit_CARMENES", 0.0, 10.0)
            .validate_against(&params)
            .unwrap();

        assert_eq!(
            Prior::hard_bounds("jit_HARPS-N", 0.0, 10.0).validate_against(&params),
            Err(RvError::UnknownParameter("jit_HARPS-N".to_string()))
        );
    }

    #[test]
    fn test_malformed_priors_rejected() {
        let params = fitting_params();
        assert_eq!(
            Prior::hard_bounds("jit_CARMENES", 10.0, 0.0).validate_against(&params),
            Err(RvError::InvalidPriorBounds {
                param: "jit_CARMENES".to_string(),
                minval: 10.0,
                maxval: 0.0,
            })
        );
        assert_eq!(
            Prior::gaussian("per1", 40.0, 0.0).validate_against(&params),
            Err(RvError::InvalidPriorWidth {
                param: "per1".to_string(),
                sigma: 0.0,
            })
        );
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(
            Prior::Eccentricity { num_planets: 2 }.to_string(),
            "Eccentricity constrained to be < 0.99"
        );
        assert_eq!(
            Prior::hard_bounds("jit_HIRES-pre", 0.0, 10.0).to_string(),
            "Bounded between 0 and 10 on parameter jit_HIRES-pre"
        );
    }
}

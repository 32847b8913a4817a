//! # GJ 849 two-planet setup
//!
//! Configuration for the GJ 849 RV fit: two giant planets on long-period orbits,
//! observed with six spectrograph configurations. Initial guesses are declared in the
//! human-convenient `per tp e w k` basis and converted to the `per tc secosw sesinw k`
//! fitting basis; the linear trend and curvature terms are held fixed at zero.
//!
//! The dataset path is supplied by the caller; times in the file are expected on the
//! BJD − 2450000 day scale, velocities in m/s.

use std::collections::HashMap;

use camino::Utf8Path;

use crate::basis::Basis;
use crate::constants::BJD0_CONVENTION;
use crate::error::RvError;
use crate::parameters::{Parameter, Parameters};
use crate::priors::Prior;
use crate::system::{Stellar, SystemSetup};
use crate::velocities::RvSet;

pub const STARNAME: &str = "GJ849";
pub const NUM_PLANETS: usize = 2;

/// Instrument configurations with distinct velocity zero points.
pub const INSTRUMENTS: [&str; 6] = [
    "HARPS-pre",
    "HARPS-post",
    "HARPS-N",
    "HIRES-pre",
    "HIRES-post",
    "CARMENES",
];

/// Initial guesses for the GJ 849 system, in the `per tp e w k` basis.
fn initial_guesses() -> Parameters {
    let mut params = Parameters::new(NUM_PLANETS, Basis::PerTpEWK);

    params.insert("per1", Parameter::new(1917.2)); // period of planet b, days
    params.insert("tp1", Parameter::new(2455848.0)); // time of periastron of planet b
    params.insert("e1", Parameter::new(0.028));
    params.insert("w1", Parameter::new(1.71)); // argument of periastron, radians
    params.insert("k1", Parameter::new(24.92)); // semi-amplitude, m/s
    params.insert("per2", Parameter::new(5768.0));
    params.insert("tp2", Parameter::new(2460488.0));
    params.insert("e2", Parameter::new(0.054));
    params.insert("w2", Parameter::new(3.653));
    params.insert("k2", Parameter::new(18.04));

    params.insert("dvdt", Parameter::new(0.0)); // slope
    params.insert("curv", Parameter::new(0.0)); // curvature

    params.insert("gamma_HARPS-pre", Parameter::new(22.06)); // velocity zero points, m/s
    params.insert("gamma_HARPS-post", Parameter::new(10.0));
    params.insert("gamma_HARPS-N", Parameter::new(-6.5));
    params.insert("gamma_HIRES-pre", Parameter::new(10.0));
    params.insert("gamma_HIRES-post", Parameter::new(5.21));
    params.insert("gamma_CARMENES", Parameter::new(-3.1));

    params.insert("jit_HARPS-pre", Parameter::new(1.93)); // jitter, m/s
    params.insert("jit_HARPS-post", Parameter::new(4.03));
    params.insert("jit_HARPS-N", Parameter::new(3.39));
    params.insert("jit_HIRES-pre", Parameter::new(3.0));
    params.insert("jit_HIRES-post", Parameter::new(4.36));
    params.insert("jit_CARMENES", Parameter::new(2.4));

    params
}

/// Build the GJ 849 setup from the RV dataset at `data_path`.
///
/// Return
/// ----------
/// * The validated [`SystemSetup`] and the loaded [`RvSet`], or an [`RvError`] on a
///   missing/malformed dataset or an inconsistent configuration.
pub fn setup(data_path: &Utf8Path) -> Result<(SystemSetup, RvSet), RvError> {
    let instruments: Vec<String> = INSTRUMENTS.iter().map(|name| name.to_string()).collect();

    let mut params = initial_guesses().to_basis(Basis::PerTcSecoswSesinwK)?;
    params.set_vary("dvdt", false)?;
    params.set_vary("curv", false)?;

    let data = RvSet::from_file(data_path)?;

    let mut priors = vec![
        Prior::Eccentricity {
            num_planets: NUM_PLANETS,
        },
        Prior::PositiveK {
            num_planets: NUM_PLANETS,
        },
    ];
    priors.extend(
        instruments
            .iter()
            .map(|instrument| Prior::hard_bounds(format!("jit_{instrument}"), 0.0, 10.0)),
    );

    let setup = SystemSetup {
        starname: STARNAME.to_string(),
        num_planets: NUM_PLANETS,
        instruments,
        fitting_basis: Basis::PerTcSecoswSesinwK,
        bjd0: BJD0_CONVENTION,
        planet_letters: HashMap::from([(1, 'b'), (2, 'c')]),
        params,
        priors,
        // mass from Rosenthal et al. 2021
        stellar: Some(Stellar {
            mass: 0.496,
            mass_err: 0.009,
        }),
        time_base: data.time_base(),
    };
    setup.validate()?;
    Ok((setup, data))
}

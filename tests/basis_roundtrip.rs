use approx::assert_relative_eq;
use rvfit::kepler::principal_angle;
use rvfit::{Basis, Parameter, Parameters};

/// Two-planet container with the GJ 849 initial guesses, in `per tp e w k`.
fn gj849_guesses() -> Parameters {
    let mut params = Parameters::new(2, Basis::PerTpEWK);
    for (key, value) in [
        ("per1", 1917.2),
        ("tp1", 2455848.0),
        ("e1", 0.028),
        ("w1", 1.71),
        ("k1", 24.92),
        ("per2", 5768.0),
        ("tp2", 2460488.0),
        ("e2", 0.054),
        ("w2", 3.653),
        ("k2", 18.04),
    ] {
        params.insert(key, Parameter::new(value));
    }
    params
}

#[test]
fn test_two_planet_fitting_basis_roundtrip() {
    let guesses = gj849_guesses();
    let fit = guesses.to_basis(Basis::PerTcSecoswSesinwK).unwrap();
    let back = fit.to_basis(Basis::PerTpEWK).unwrap();

    for planet in 1..=2 {
        assert_relative_eq!(
            back.planet_value("per", planet).unwrap(),
            guesses.planet_value("per", planet).unwrap()
        );
        assert_relative_eq!(
            back.planet_value("k", planet).unwrap(),
            guesses.planet_value("k", planet).unwrap()
        );
        assert_relative_eq!(
            back.planet_value("e", planet).unwrap(),
            guesses.planet_value("e", planet).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            principal_angle(back.planet_value("w", planet).unwrap()),
            principal_angle(guesses.planet_value("w", planet).unwrap()),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            back.planet_value("tp", planet).unwrap(),
            guesses.planet_value("tp", planet).unwrap(),
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_sqrt_and_plain_pairs_are_consistent() {
    let guesses = gj849_guesses();
    let sqrt_pair = guesses.to_basis(Basis::PerTcSecoswSesinwK).unwrap();
    let plain_pair = guesses.to_basis(Basis::PerTcEcoswEsinwK).unwrap();

    for planet in 1..=2 {
        let ecc = guesses.planet_value("e", planet).unwrap();
        let scale = ecc.sqrt();

        // ecosw = √e · secosw, esinw = √e · sesinw
        assert_relative_eq!(
            plain_pair.planet_value("ecosw", planet).unwrap(),
            scale * sqrt_pair.planet_value("secosw", planet).unwrap(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            plain_pair.planet_value("esinw", planet).unwrap(),
            scale * sqrt_pair.planet_value("sesinw", planet).unwrap(),
            epsilon = 1e-12
        );

        // both pair bases agree on the conjunction time
        assert_relative_eq!(
            plain_pair.planet_value("tc", planet).unwrap(),
            sqrt_pair.planet_value("tc", planet).unwrap(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_conjunction_time_stays_within_one_period_of_periastron() {
    let guesses = gj849_guesses();
    let fit = guesses.to_basis(Basis::PerTcEWK).unwrap();

    for planet in 1..=2 {
        let per = guesses.planet_value("per", planet).unwrap();
        let tp = guesses.planet_value("tp", planet).unwrap();
        let tc = fit.planet_value("tc", planet).unwrap();
        assert!(
            (tc - tp).abs() <= per,
            "planet {planet}: tc {tc} further than one period from tp {tp}"
        );
    }
}

#[test]
fn test_instrument_terms_unchanged_by_conversion() {
    let mut guesses = gj849_guesses();
    guesses.insert("dvdt", Parameter::new(0.0));
    guesses.insert("curv", Parameter::new(0.0));
    guesses.insert("gamma_CARMENES", Parameter::new(-3.1));
    guesses.insert("jit_CARMENES", Parameter::new(2.4));

    let fit = guesses.to_basis(Basis::PerTcSecoswSesinwK).unwrap();
    assert_eq!(fit.value("gamma_CARMENES").unwrap(), -3.1);
    assert_eq!(fit.value("jit_CARMENES").unwrap(), 2.4);
    assert_eq!(fit.value("dvdt").unwrap(), 0.0);
    assert_eq!(fit.value("curv").unwrap(), 0.0);
}

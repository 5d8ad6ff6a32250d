mod common;

use chainmech::get_default_reference;
use chainmech::math::constants::BOLTZMANN_CONSTANT;
use chainmech::math::quadrature::{log_log_slope, rms_relative_error};
use chainmech::single_chain::morse_fjc::MorseFjc;
use common::{assert_close, Parameters};

fn reference_chain() -> MorseFjc {
    let reference = get_default_reference().get("morse_fjc").unwrap();
    MorseFjc::new(
        reference.number_of_links,
        reference.link_length,
        reference.hinge_mass,
        reference.link_stiffness.unwrap(),
        reference.link_energy.unwrap(),
    )
    .unwrap()
}

fn chain_with_stiffness(link_stiffness: f64) -> MorseFjc {
    let reference = get_default_reference().get("morse_fjc").unwrap();
    MorseFjc::new(
        reference.number_of_links,
        reference.link_length,
        reference.hinge_mass,
        link_stiffness,
        reference.link_energy.unwrap(),
    )
    .unwrap()
}

fn nondimensional_maximum_force(chain: &MorseFjc, temperature: f64) -> f64 {
    chain.thermodynamics.isotensional.maximum_force(temperature) * chain.link_length()
        / (BOLTZMANN_CONSTANT * temperature)
}

#[test]
fn nondimensionalization_round_trips() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let reference = get_default_reference().get("morse_fjc").unwrap();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let link_length = parameters.draw_link_length(&mut rng);
        let hinge_mass = parameters.draw_hinge_mass(&mut rng);
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = MorseFjc::new(
            number_of_links,
            link_length,
            hinge_mass,
            reference.link_stiffness.unwrap(),
            reference.link_energy.unwrap(),
        )
        .unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        let force = eta * BOLTZMANN_CONSTANT * temperature / link_length;
        assert_close(
            "end-to-end length",
            isotensional.end_to_end_length(force, temperature),
            isotensional.nondimensional_end_to_end_length(eta, temperature) * link_length,
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "relative gibbs free energy",
            isotensional.relative_gibbs_free_energy(force, temperature),
            isotensional.nondimensional_relative_gibbs_free_energy(eta, temperature)
                * BOLTZMANN_CONSTANT
                * temperature,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn asymptotic_error_decays_as_the_inverse_nondimensional_stiffness() {
    let parameters = Parameters::default();
    let temperature = parameters.temperature_reference;
    let residual_at = |link_stiffness: f64| {
        let chain = chain_with_stiffness(link_stiffness);
        let isotensional = &chain.thermodynamics.isotensional;
        rms_relative_error(
            |eta| {
                isotensional
                    .asymptotic
                    .nondimensional_end_to_end_length_per_link(eta, temperature)
            },
            |eta| isotensional.nondimensional_end_to_end_length_per_link(eta, temperature),
            parameters.zero,
            20.0,
            50,
        )
    };
    let stiffness = 6.24e5;
    let kappa = stiffness / (BOLTZMANN_CONSTANT * temperature);
    let coarse = residual_at(stiffness);
    let fine = residual_at(parameters.log_log_scale * stiffness);
    let slope = log_log_slope(kappa, coarse, parameters.log_log_scale * kappa, fine);
    assert!(
        (slope + 1.0).abs() <= parameters.log_log_tol,
        "asymptotic error slope {slope} is not -1"
    );
    assert!(coarse <= 0.05, "asymptotic residual {coarse} too large");
}

#[test]
fn reduced_error_decays_as_the_inverse_square_root_nondimensional_stiffness() {
    let parameters = Parameters::default();
    let temperature = parameters.temperature_reference;
    let residual_at = |link_stiffness: f64| {
        let chain = chain_with_stiffness(link_stiffness);
        let isotensional = &chain.thermodynamics.isotensional;
        rms_relative_error(
            |eta| {
                isotensional
                    .asymptotic
                    .reduced
                    .nondimensional_end_to_end_length_per_link(eta, temperature)
            },
            |eta| isotensional.nondimensional_end_to_end_length_per_link(eta, temperature),
            parameters.zero,
            nondimensional_maximum_force(&chain, temperature),
            50,
        )
    };
    let stiffness = 5.0e6;
    let kappa = stiffness / (BOLTZMANN_CONSTANT * temperature);
    let coarse = residual_at(stiffness);
    let fine = residual_at(parameters.log_log_scale * stiffness);
    let slope = log_log_slope(kappa, coarse, parameters.log_log_scale * kappa, fine);
    assert!(
        (slope + 0.5).abs() <= parameters.log_log_tol,
        "reduced error slope {slope} is not -1/2"
    );
    assert!(coarse <= 0.05, "reduced residual {coarse} too large");
}

#[test]
fn isometric_legendre_force_inverts_the_isotensional_extension() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let chain = reference_chain();
    for _ in 0..parameters.number_of_samples {
        let temperature = parameters.draw_temperature(&mut rng);
        let eta_max = nondimensional_maximum_force(&chain, temperature);
        let eta = parameters.draw_nondimensional_force(&mut rng).min(0.8 * eta_max);
        let gamma = chain
            .thermodynamics
            .isotensional
            .nondimensional_end_to_end_length_per_link(eta, temperature);
        let recovered = chain
            .thermodynamics
            .isometric
            .legendre
            .nondimensional_force(gamma, temperature);
        assert_close("recovered force", recovered, eta, parameters.abs_tol, parameters.rel_tol);
    }
}

#[test]
fn helmholtz_is_the_legendre_transform_of_gibbs() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let chain = reference_chain();
    let isotensional = &chain.thermodynamics.isotensional;
    for _ in 0..parameters.number_of_samples {
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let force = eta * BOLTZMANN_CONSTANT * temperature / chain.link_length();
        let length = isotensional.end_to_end_length(force, temperature);
        assert_close(
            "relative legendre transform",
            isotensional.legendre.relative_helmholtz_free_energy(force, temperature),
            isotensional.relative_gibbs_free_energy(force, temperature) + force * length,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn extension_is_the_force_derivative_of_the_gibbs_free_energy() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let step = parameters.rel_tol;
    let chain = reference_chain();
    let isotensional = &chain.thermodynamics.isotensional;
    for _ in 0..parameters.number_of_samples {
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let derivative = (isotensional
            .nondimensional_relative_gibbs_free_energy(eta + step, temperature)
            - isotensional.nondimensional_relative_gibbs_free_energy(eta - step, temperature))
            / (2.0 * step);
        assert_close(
            "extension from gibbs derivative",
            isotensional.nondimensional_end_to_end_length(eta, temperature),
            -derivative,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn zero_force_limit_of_the_relative_gibbs_free_energy_vanishes() {
    let parameters = Parameters::default();
    let chain = reference_chain();
    let value = chain
        .thermodynamics
        .isotensional
        .nondimensional_relative_gibbs_free_energy(
            parameters.zero,
            parameters.temperature_reference,
        );
    assert!(value.abs() <= parameters.abs_tol, "relative gibbs {value} did not vanish");
}

mod common;

use chainmech::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use chainmech::single_chain::fjc::Fjc;
use common::{assert_close, Parameters};

#[test]
fn nondimensionalization_round_trips() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let link_length = parameters.draw_link_length(&mut rng);
        let hinge_mass = parameters.draw_hinge_mass(&mut rng);
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Fjc::new(number_of_links, link_length, hinge_mass).unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        let force = eta * BOLTZMANN_CONSTANT * temperature / link_length;
        assert_close(
            "end-to-end length",
            isotensional.end_to_end_length(force, temperature),
            isotensional.nondimensional_end_to_end_length(eta) * link_length,
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "gibbs free energy",
            isotensional.gibbs_free_energy(force, temperature),
            isotensional.nondimensional_gibbs_free_energy(eta, temperature)
                * BOLTZMANN_CONSTANT
                * temperature,
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "relative gibbs free energy",
            isotensional.relative_gibbs_free_energy(force, temperature),
            isotensional.nondimensional_relative_gibbs_free_energy(eta)
                * BOLTZMANN_CONSTANT
                * temperature,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn extension_follows_the_langevin_function() {
    let parameters = Parameters::default();
    let chain = Fjc::new(8, 1.0, 1.0).unwrap();
    let isotensional = &chain.thermodynamics.isotensional;
    for eta in [0.1f64, 0.5, 1.0, 2.5, 10.0] {
        let langevin = 1.0 / eta.tanh() - 1.0 / eta;
        assert_close(
            "langevin extension",
            isotensional.nondimensional_end_to_end_length_per_link(eta),
            langevin,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn per_link_quantities_scale_with_the_link_count() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Fjc::new(number_of_links, 1.0, 1.0).unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        assert_close(
            "extension per link",
            isotensional.nondimensional_end_to_end_length_per_link(eta)
                * number_of_links as f64,
            isotensional.nondimensional_end_to_end_length(eta),
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "relative gibbs per link",
            isotensional.nondimensional_relative_gibbs_free_energy_per_link(eta)
                * number_of_links as f64,
            isotensional.nondimensional_relative_gibbs_free_energy(eta),
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "relative helmholtz per link",
            isotensional
                .legendre
                .nondimensional_relative_helmholtz_free_energy_per_link(eta)
                * number_of_links as f64,
            isotensional
                .legendre
                .nondimensional_relative_helmholtz_free_energy(eta),
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn relative_energies_subtract_the_zero_force_reference() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let link_length = parameters.draw_link_length(&mut rng);
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Fjc::new(number_of_links, link_length, 1.0).unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        let force = eta * BOLTZMANN_CONSTANT * temperature / link_length;
        let force_zero = parameters.zero * BOLTZMANN_CONSTANT * temperature / link_length;
        assert_close(
            "zero-force reference",
            isotensional.relative_gibbs_free_energy(force, temperature),
            isotensional.gibbs_free_energy(force, temperature)
                - isotensional.gibbs_free_energy(force_zero, temperature),
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn zero_force_and_zero_extension_limits_vanish() {
    let parameters = Parameters::default();
    let chain = Fjc::new(8, 1.0, 1.0).unwrap();
    let thermodynamics = &chain.thermodynamics;
    assert!(
        thermodynamics
            .isotensional
            .nondimensional_end_to_end_length_per_link(parameters.zero)
            .abs()
            <= parameters.zero
    );
    assert!(
        thermodynamics
            .isotensional
            .nondimensional_relative_gibbs_free_energy(parameters.zero)
            .abs()
            <= parameters.abs_tol
    );
    assert!(
        thermodynamics
            .isometric
            .nondimensional_relative_helmholtz_free_energy(parameters.zero)
            .abs()
            <= parameters.abs_tol
    );
}

#[test]
fn helmholtz_is_the_legendre_transform_of_gibbs() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let link_length = parameters.draw_link_length(&mut rng);
        let hinge_mass = parameters.draw_hinge_mass(&mut rng);
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Fjc::new(number_of_links, link_length, hinge_mass).unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        let force = eta * BOLTZMANN_CONSTANT * temperature / link_length;
        let length = isotensional.end_to_end_length(force, temperature);
        let lambda = rotational_partition_factor(hinge_mass, link_length, temperature);
        assert_close(
            "relative legendre transform",
            isotensional.legendre.relative_helmholtz_free_energy(force, temperature),
            isotensional.relative_gibbs_free_energy(force, temperature) + force * length,
            parameters.abs_tol,
            parameters.rel_tol,
        );
        assert_close(
            "absolute legendre transform",
            isotensional.legendre.helmholtz_free_energy(force, temperature),
            isotensional.gibbs_free_energy(force, temperature)
                + force * length
                + BOLTZMANN_CONSTANT * temperature * lambda.ln(),
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
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Fjc::new(number_of_links, 1.0, 1.0).unwrap();
        let isotensional = &chain.thermodynamics.isotensional;
        let derivative = (isotensional.nondimensional_relative_gibbs_free_energy(eta + step)
            - isotensional.nondimensional_relative_gibbs_free_energy(eta - step))
            / (2.0 * step);
        assert_close(
            "extension from gibbs derivative",
            isotensional.nondimensional_end_to_end_length(eta),
            -derivative,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn exact_isometric_force_is_the_extension_derivative_of_helmholtz() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let step = parameters.rel_tol;
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let gamma = parameters.draw_nondimensional_extension(&mut rng);
        let chain = Fjc::new(number_of_links, 1.0, 1.0).unwrap();
        let isometric = &chain.thermodynamics.isometric;
        let derivative = (isometric.nondimensional_relative_helmholtz_free_energy(gamma + step)
            - isometric.nondimensional_relative_helmholtz_free_energy(gamma - step))
            / (2.0 * step)
            / number_of_links as f64;
        assert_close(
            "force from helmholtz derivative",
            isometric.nondimensional_force(gamma),
            derivative,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn exact_isometric_force_approaches_the_legendre_force_at_many_links() {
    let parameters = Parameters::default();
    let chain = Fjc::new(parameters.number_of_links_maximum, 1.0, 1.0).unwrap();
    let isometric = &chain.thermodynamics.isometric;
    for i in 0..9 {
        let gamma = 0.3 + 0.05 * i as f64;
        assert_close(
            "thermodynamic-limit force",
            isometric.nondimensional_force(gamma),
            isometric.legendre.nondimensional_force(gamma),
            parameters.abs_tol,
            parameters.rel_tol_thermodynamic_limit,
        );
    }
}

#[test]
fn exact_isometric_helmholtz_approaches_the_legendre_branch_at_many_links() {
    let parameters = Parameters::default();
    let chain = Fjc::new(parameters.number_of_links_maximum, 1.0, 1.0).unwrap();
    let isometric = &chain.thermodynamics.isometric;
    for i in 0..9 {
        let gamma = 0.3 + 0.05 * i as f64;
        assert_close(
            "thermodynamic-limit helmholtz",
            isometric.nondimensional_relative_helmholtz_free_energy(gamma),
            isometric
                .legendre
                .nondimensional_relative_helmholtz_free_energy(gamma),
            parameters.abs_tol,
            parameters.rel_tol_thermodynamic_limit,
        );
    }
}

#[test]
fn force_round_trips_through_both_ensembles() {
    // A long stiff pull: the extension sits deep in the saturated regime and
    // the inverse Langevin map has to recover the force from it.
    let parameters = Parameters::default();
    let chain = Fjc::new(25, 1.0, 1.0).unwrap();
    let temperature = 300.0;
    let eta = 50.75;
    let force = eta * BOLTZMANN_CONSTANT * temperature / chain.link_length();
    let length = chain
        .thermodynamics
        .isotensional
        .end_to_end_length(force, temperature);
    let recovered = chain
        .thermodynamics
        .isometric
        .legendre
        .force(length, temperature);
    assert_close("round-trip force", recovered, force, parameters.abs_tol, parameters.rel_tol);
}

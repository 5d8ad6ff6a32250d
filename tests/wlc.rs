mod common;

use chainmech::get_default_reference;
use chainmech::math::constants::BOLTZMANN_CONSTANT;
use chainmech::single_chain::wlc::Wlc;
use common::{assert_close, Parameters};

fn reference_chain() -> Wlc {
    let reference = get_default_reference().get("wlc").unwrap();
    Wlc::new(
        reference.number_of_links,
        reference.link_length,
        reference.hinge_mass,
        reference.persistence_length.unwrap(),
    )
    .unwrap()
}

#[test]
fn nondimensionalization_round_trips() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let reference = get_default_reference().get("wlc").unwrap();
    for _ in 0..parameters.number_of_samples {
        let number_of_links = parameters.draw_number_of_links(&mut rng);
        let link_length = parameters.draw_link_length(&mut rng);
        let hinge_mass = parameters.draw_hinge_mass(&mut rng);
        let temperature = parameters.draw_temperature(&mut rng);
        let eta = parameters.draw_nondimensional_force(&mut rng);
        let chain = Wlc::new(
            number_of_links,
            link_length,
            hinge_mass,
            reference.persistence_length.unwrap() * link_length,
        )
        .unwrap();
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
fn the_force_law_is_the_extension_derivative_of_the_energy_density() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let step = parameters.rel_tol;
    let chain = reference_chain();
    let isometric = &chain.thermodynamics.isometric;
    let links = f64::from(chain.number_of_links());
    for _ in 0..parameters.number_of_samples {
        let gamma = parameters.draw_nondimensional_extension(&mut rng);
        let derivative = (isometric.nondimensional_relative_helmholtz_free_energy(gamma + step)
            - isometric.nondimensional_relative_helmholtz_free_energy(gamma - step))
            / (2.0 * step);
        assert_close(
            "force from helmholtz derivative",
            isometric.nondimensional_force(gamma),
            derivative / links,
            parameters.abs_tol,
            parameters.rel_tol,
        );
    }
}

#[test]
fn isotensional_extension_inverts_the_force_law() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let chain = reference_chain();
    for _ in 0..parameters.number_of_samples {
        let gamma = parameters.draw_nondimensional_extension(&mut rng);
        let eta = chain.thermodynamics.isometric.nondimensional_force(gamma);
        let recovered = chain
            .thermodynamics
            .isotensional
            .nondimensional_end_to_end_length_per_link(eta);
        assert_close("recovered extension", recovered, gamma, parameters.abs_tol, parameters.rel_tol);
    }
}

#[test]
fn isometric_legendre_recovers_the_gibbs_branch() {
    let parameters = Parameters::default();
    let mut rng = parameters.rng();
    let chain = reference_chain();
    let isometric = &chain.thermodynamics.isometric;
    let links = f64::from(chain.number_of_links());
    for _ in 0..parameters.number_of_samples {
        let gamma = parameters.draw_nondimensional_extension(&mut rng);
        let eta = isometric.nondimensional_force(gamma);
        assert_close(
            "relative gibbs branch",
            isometric.legendre.nondimensional_relative_gibbs_free_energy(gamma),
            isometric.nondimensional_relative_helmholtz_free_energy(gamma) - links * eta * gamma,
            parameters.abs_tol,
            parameters.rel_tol,
        );
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
fn the_configurational_reference_is_independent_of_force() {
    let parameters = Parameters::default();
    let chain = reference_chain();
    let isotensional = &chain.thermodynamics.isotensional;
    let reference_at = |eta: f64| {
        isotensional.nondimensional_gibbs_free_energy(eta)
            - isotensional.nondimensional_relative_gibbs_free_energy(eta)
    };
    assert_close(
        "reference factor",
        reference_at(0.5),
        reference_at(4.5),
        parameters.abs_tol,
        parameters.rel_tol,
    );
}

#[test]
fn a_longer_persistence_length_extends_further_under_the_same_force() {
    let parameters = Parameters::default();
    let reference = get_default_reference().get("wlc").unwrap();
    let flexible = reference_chain();
    let stiff = Wlc::new(
        reference.number_of_links,
        reference.link_length,
        reference.hinge_mass,
        2.0 * reference.persistence_length.unwrap(),
    )
    .unwrap();
    let eta = parameters.nondimensional_force_reference;
    assert!(
        stiff
            .thermodynamics
            .isotensional
            .nondimensional_end_to_end_length_per_link(eta)
            > flexible
                .thermodynamics
                .isotensional
                .nondimensional_end_to_end_length_per_link(eta)
    );
}

#[test]
fn zero_extension_limits_vanish() {
    let parameters = Parameters::default();
    let chain = reference_chain();
    let isometric = &chain.thermodynamics.isometric;
    let eta = isometric.nondimensional_force(parameters.zero);
    assert!(eta.abs() <= parameters.zero, "force {eta} did not vanish");
    let helmholtz = isometric.nondimensional_relative_helmholtz_free_energy(parameters.zero);
    assert!(
        helmholtz.abs() <= parameters.abs_tol,
        "relative helmholtz {helmholtz} did not vanish"
    );
}

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerances and sampling ranges shared by every integration test.
///
/// The tolerance fields are the contract of the whole suite: deterministic
/// identities must hold to `abs_tol` absolutely or `rel_tol` relatively,
/// cross-ensemble agreement at large link counts to
/// `rel_tol_thermodynamic_limit`, and every two-point convergence-order
/// estimate (taken between stiffnesses separated by `log_log_scale`) must
/// land within `log_log_tol` of the predicted exponent. `zero` stands in for
/// vanishing force or extension wherever an exact zero is singular.
pub struct Parameters {
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub rel_tol_thermodynamic_limit: f64,
    pub log_log_tol: f64,
    pub log_log_scale: f64,
    pub zero: f64,
    pub number_of_samples: usize,
    pub number_of_links_minimum: u8,
    pub number_of_links_maximum: u8,
    pub link_length_reference: f64,
    pub link_length_scale: f64,
    pub hinge_mass_reference: f64,
    pub hinge_mass_scale: f64,
    pub temperature_reference: f64,
    pub temperature_scale: f64,
    pub nondimensional_force_reference: f64,
    pub nondimensional_force_scale: f64,
    pub nondimensional_extension_reference: f64,
    pub nondimensional_extension_scale: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            abs_tol: 1e-7,
            rel_tol: 1e-5,
            rel_tol_thermodynamic_limit: 1e-1,
            log_log_tol: 5e-2,
            log_log_scale: 1.2,
            zero: 1e-6,
            number_of_samples: 8,
            number_of_links_minimum: 8,
            number_of_links_maximum: 25,
            link_length_reference: 1.0,
            link_length_scale: 1.0,
            hinge_mass_reference: 1.0,
            hinge_mass_scale: 1.0,
            temperature_reference: 300.0,
            temperature_scale: 100.0,
            nondimensional_force_reference: 2.5,
            nondimensional_force_scale: 4.0,
            nondimensional_extension_reference: 0.5,
            nondimensional_extension_scale: 0.4,
        }
    }
}

impl Parameters {
    /// A fixed-seed generator so every run draws the same chains.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    pub fn draw_number_of_links(&self, rng: &mut StdRng) -> u8 {
        rng.gen_range(self.number_of_links_minimum..=self.number_of_links_maximum)
    }

    pub fn draw_link_length(&self, rng: &mut StdRng) -> f64 {
        self.link_length_reference + self.link_length_scale * (rng.gen::<f64>() - 0.5)
    }

    pub fn draw_hinge_mass(&self, rng: &mut StdRng) -> f64 {
        self.hinge_mass_reference + self.hinge_mass_scale * (rng.gen::<f64>() - 0.5)
    }

    pub fn draw_temperature(&self, rng: &mut StdRng) -> f64 {
        self.temperature_reference + self.temperature_scale * (rng.gen::<f64>() - 0.5)
    }

    pub fn draw_nondimensional_force(&self, rng: &mut StdRng) -> f64 {
        self.nondimensional_force_reference
            + self.nondimensional_force_scale * (rng.gen::<f64>() - 0.5)
    }

    pub fn draw_nondimensional_extension(&self, rng: &mut StdRng) -> f64 {
        self.nondimensional_extension_reference
            + self.nondimensional_extension_scale * (rng.gen::<f64>() - 0.5)
    }
}

/// Asserts `value` matches `reference` within the absolute OR the relative bound.
///
/// Dimensional quantities can be huge (molar energy units) or tiny (zero-force
/// limits), so neither bound alone serves every comparison; a value passes if
/// either does.
pub fn assert_close(label: &str, value: f64, reference: f64, abs_tol: f64, rel_tol: f64) {
    let deviation = (value - reference).abs();
    assert!(
        deviation <= abs_tol || deviation <= rel_tol * reference.abs(),
        "{label}: {value} deviates from {reference} by {deviation} \
         (absolute limit {abs_tol}, relative limit {rel_tol})"
    );
}

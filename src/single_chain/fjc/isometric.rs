//! Isometric (fixed-length) thermodynamics of the freely-jointed chain.
//!
//! The configurational density of the end-to-end vector is the classical
//! Treloar/Rayleigh result: with lengths in link units,
//! `W(r) ∝ (1/r)·Σ_k (−1)^k C(N,k)·(N − 2k − r)^(N−2)` over the terms with a
//! positive base. The Helmholtz free energy is `−kB·T·ln W` and the force its
//! extension derivative, both exact at every link count. The `legendre`
//! sub-facet instead inverts the isotensional Langevin map; the two agree in
//! the thermodynamic limit, and the latter is the exact inverse required by
//! force round trips through the isotensional ensemble.

use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use crate::math::special::{inverse_langevin, ln_binomial, ln_sinhc};

/// Alternating Treloar sum `Σ_k (−1)^k C(N,k)·(N − 2k − r)^p`.
///
/// Terms are assembled in log space via `ln_binomial` so the sum stays usable
/// up to the largest link counts the library validates. Only terms with a
/// strictly positive base contribute.
pub(super) fn treloar_sum(number_of_links: u8, r: f64, exponent: i32) -> f64 {
    let n = number_of_links as f64;
    let k_max = ((n - r) / 2.0).floor().max(0.0) as u64;
    let mut sum = 0.0;
    for k in 0..=k_max {
        let base = n - 2.0 * k as f64 - r;
        if base <= 0.0 {
            continue;
        }
        let magnitude =
            (ln_binomial(number_of_links as u64, k) + exponent as f64 * base.ln()).exp();
        sum += if k % 2 == 0 { magnitude } else { -magnitude };
    }
    sum
}

/// Limit of `S_(N−2)(r)/r` as `r → 0`, the zero-extension density reference.
pub(super) fn treloar_zero_limit(number_of_links: u8) -> f64 {
    let n = number_of_links as f64;
    -(n - 2.0) * treloar_sum(number_of_links, 0.0, number_of_links as i32 - 3)
}

/// The isometric view of the freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Quantities from inverting the isotensional map instead of the exact density.
    pub legendre: IsometricLegendre,
}

impl Isometric {
    pub(super) fn new(number_of_links: u8, link_length: f64, hinge_mass: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            hinge_mass,
            legendre: IsometricLegendre {
                number_of_links,
                link_length,
                hinge_mass,
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length)) * BOLTZMANN_CONSTANT * temperature
            / self.link_length
    }

    /// Nondimensional force, `−∂ln W/∂r` at `r = Nγ` in link units.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        let r = self.links() * nondimensional_end_to_end_length_per_link;
        let n = self.number_of_links as i32;
        1.0 / r
            + (self.links() - 2.0) * treloar_sum(self.number_of_links, r, n - 3)
                / treloar_sum(self.number_of_links, r, n - 2)
    }

    /// Helmholtz free energy at fixed end-to-end length.
    pub fn helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Helmholtz free energy per link at fixed end-to-end length.
    pub fn helmholtz_free_energy_per_link(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Helmholtz free energy relative to the zero-extension reference.
    pub fn relative_helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length))
    }

    /// Per-link Helmholtz free energy relative to the zero-extension reference.
    pub fn relative_helmholtz_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional Helmholtz free energy.
    pub fn nondimensional_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            - (self.links() - 1.0) * lambda.ln()
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_end_to_end_length_per_link, temperature)
            / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `−ln(W(Nγ)/W(0))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        let r = self.links() * nondimensional_end_to_end_length_per_link;
        let n = self.number_of_links as i32;
        -(treloar_sum(self.number_of_links, r, n - 2)
            / (r * treloar_zero_limit(self.number_of_links)))
        .ln()
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            / self.links()
    }
}

/// Force and free energies from inverting the isotensional map.
///
/// The force at extension `γ` is the inverse Langevin `L⁻¹(γ)`, i.e. the
/// Legendre-transform approximation to the isometric ensemble, exact in the
/// thermodynamic limit.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
}

impl IsometricLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    /// Force recovered by inverting the isotensional extension map.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        inverse_langevin(self.gamma(end_to_end_length)) * BOLTZMANN_CONSTANT * temperature
            / self.link_length
    }

    /// Nondimensional force, the inverse Langevin `L⁻¹(γ)`.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        inverse_langevin(nondimensional_end_to_end_length_per_link)
    }

    /// Helmholtz free energy via the Legendre transform of the Gibbs free energy.
    pub fn helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Helmholtz free energy per link via the Legendre transform.
    pub fn helmholtz_free_energy_per_link(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Relative Helmholtz free energy via the Legendre transform.
    pub fn relative_helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length))
    }

    /// Per-link relative Helmholtz free energy via the Legendre transform.
    pub fn relative_helmholtz_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional Helmholtz free energy via the Legendre transform.
    pub fn nondimensional_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            - (self.links() - 1.0) * lambda.ln()
    }

    /// Nondimensional Helmholtz free energy per link via the Legendre transform.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_end_to_end_length_per_link, temperature)
            / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·(γ·L⁻¹(γ) − ln(sinh L⁻¹(γ)/L⁻¹(γ)))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        let eta = inverse_langevin(nondimensional_end_to_end_length_per_link);
        self.links() * (eta * nondimensional_end_to_end_length_per_link - ln_sinhc(eta))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            / self.links()
    }

    /// Gibbs free energy at the force conjugate to the given extension.
    pub fn gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        let eta = inverse_langevin(self.gamma(end_to_end_length));
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        BOLTZMANN_CONSTANT * temperature * self.links() * (-ln_sinhc(eta) - lambda.ln())
    }

    /// Relative Gibbs free energy at the force conjugate to the given extension.
    pub fn relative_gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        let eta = inverse_langevin(self.gamma(end_to_end_length));
        -BOLTZMANN_CONSTANT * temperature * self.links() * ln_sinhc(eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_treloar_sum_three_links() {
        // For N = 3 the sum with exponent 1 is exactly 2r on (0, 1).
        for r in [0.1, 0.5, 0.9] {
            assert_relative_eq!(treloar_sum(3, r, 1), 2.0 * r, max_relative = 1e-12);
        }
        assert_relative_eq!(treloar_zero_limit(3), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_force_vanishes_at_small_extension() {
        let facet = Isometric::new(8, 1.0, 1.0);
        // Three-link result is flat; eight links give a Gaussian-like ~3γ law.
        let gamma = 1e-4;
        let eta = facet.nondimensional_force(gamma);
        assert!(eta.abs() < 1e-2, "force {eta} did not vanish");
    }

    #[test]
    fn test_relative_helmholtz_zero_reference() {
        let facet = Isometric::new(8, 1.0, 1.0);
        let tiny = facet.nondimensional_relative_helmholtz_free_energy(1e-6);
        assert!(tiny.abs() < 1e-6);
    }

    #[test]
    fn test_force_is_derivative_of_relative_helmholtz() {
        let facet = Isometric::new(16, 1.0, 1.0);
        let gamma = 0.45;
        let h = 1e-6;
        let fd = (facet.nondimensional_relative_helmholtz_free_energy(gamma + h)
            - facet.nondimensional_relative_helmholtz_free_energy(gamma - h))
            / (2.0 * h)
            / 16.0;
        assert_relative_eq!(facet.nondimensional_force(gamma), fd, max_relative = 1e-6);
    }

    #[test]
    fn test_legendre_force_matches_exact_in_thermodynamic_limit() {
        let facet = Isometric::new(25, 1.0, 1.0);
        let gamma = 0.5;
        let exact = facet.nondimensional_force(gamma);
        let legendre = facet.legendre.nondimensional_force(gamma);
        assert_relative_eq!(exact, legendre, max_relative = 0.1);
    }
}

//! Isometric thermodynamics of the Morse freely-jointed chain.
//!
//! As for the Lennard-Jones chain, every fixed-length quantity inverts a
//! force–extension map on the stable force range `[0, η_max]` and
//! Legendre-transforms the matching Gibbs free energy.

use super::isotensional::{
    asymptotic_extension, asymptotic_relative_gibbs, exact_extension, exact_relative_gibbs,
    reduced_extension, reduced_relative_gibbs, reference_scale,
};
use super::link_potential::force_max;
use crate::math::constants::BOLTZMANN_CONSTANT;
use crate::math::rootfind::invert_monotone;
use crate::math::special::langevin_derivative;

/// Inverts an extension map on the stable force range of the link potential.
fn invert_extension<F>(map: F, gamma: f64, kappa: f64, energy: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    invert_monotone(
        map,
        |eta| langevin_derivative(eta) + 1.0 / kappa,
        gamma,
        0.0,
        force_max(kappa, energy),
    )
}

/// The isometric view of the Morse chain, reached through its sub-facets.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    /// Quantities from inverting the exact isotensional map.
    pub legendre: IsometricLegendre,
    /// Stiff-link asymptotic expansion.
    pub asymptotic: IsometricAsymptotic,
}

impl Isometric {
    pub(super) fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
        link_energy: f64,
    ) -> Self {
        Self {
            legendre: IsometricLegendre {
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
                link_energy,
            },
            asymptotic: IsometricAsymptotic {
                number_of_links,
                link_length,
                link_stiffness,
                link_energy,
                reduced: IsometricAsymptoticReduced {
                    number_of_links,
                    link_length,
                    link_stiffness,
                    link_energy,
                },
            },
        }
    }
}

/// Force and free energies from inverting the exact isotensional map.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    link_energy: f64,
}

impl IsometricLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    fn energy(&self, temperature: f64) -> f64 {
        self.link_energy / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Force recovered by inverting the exact isotensional extension map.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length), temperature)
            * BOLTZMANN_CONSTANT
            * temperature
            / self.link_length
    }

    /// Nondimensional force conjugate to the given extension.
    pub fn nondimensional_force(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        invert_extension(
            |eta| exact_extension(eta, kappa, energy),
            nondimensional_end_to_end_length_per_link,
            kappa,
            energy,
        )
    }

    /// Helmholtz free energy via the Legendre transform.
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
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Per-link relative Helmholtz free energy via the Legendre transform.
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
        let kappa = self.kappa(temperature);
        self.nondimensional_relative_helmholtz_free_energy(
            nondimensional_end_to_end_length_per_link,
            temperature,
        ) - (self.links() - 1.0)
            * reference_scale(self.hinge_mass, self.link_length, kappa, temperature)
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

    /// Nondimensional relative Helmholtz free energy, `N·(η*γ + ḡ_rel(η*))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let gamma = nondimensional_end_to_end_length_per_link;
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        let eta = invert_extension(|eta| exact_extension(eta, kappa, energy), gamma, kappa, energy);
        self.links() * (eta * gamma + exact_relative_gibbs(eta, kappa, energy))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(
            nondimensional_end_to_end_length_per_link,
            temperature,
        ) / self.links()
    }
}

/// Stiff-link asymptotic expansion of the isometric quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricAsymptotic {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
    link_energy: f64,
    /// Leading-order truncation of the expansion.
    pub reduced: IsometricAsymptoticReduced,
}

impl IsometricAsymptotic {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    fn energy(&self, temperature: f64) -> f64 {
        self.link_energy / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length), temperature)
            * BOLTZMANN_CONSTANT
            * temperature
            / self.link_length
    }

    /// Nondimensional force, the inverse of the asymptotic extension map.
    pub fn nondimensional_force(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        invert_extension(
            |eta| asymptotic_extension(eta, kappa, energy),
            nondimensional_end_to_end_length_per_link,
            kappa,
            energy,
        )
    }

    /// Relative Helmholtz free energy at fixed end-to-end length.
    pub fn relative_helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Per-link relative Helmholtz free energy at fixed end-to-end length.
    pub fn relative_helmholtz_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let gamma = nondimensional_end_to_end_length_per_link;
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        let eta = invert_extension(
            |eta| asymptotic_extension(eta, kappa, energy),
            gamma,
            kappa,
            energy,
        );
        self.links() * (eta * gamma + asymptotic_relative_gibbs(eta, kappa, energy))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(
            nondimensional_end_to_end_length_per_link,
            temperature,
        ) / self.links()
    }
}

/// Leading-order truncation of the stiff-link isometric expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricAsymptoticReduced {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
    link_energy: f64,
}

impl IsometricAsymptoticReduced {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    fn energy(&self, temperature: f64) -> f64 {
        self.link_energy / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length), temperature)
            * BOLTZMANN_CONSTANT
            * temperature
            / self.link_length
    }

    /// Nondimensional force, the inverse of the reduced extension map.
    pub fn nondimensional_force(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        invert_extension(
            |eta| reduced_extension(eta, kappa, energy),
            nondimensional_end_to_end_length_per_link,
            kappa,
            energy,
        )
    }

    /// Relative Helmholtz free energy at fixed end-to-end length.
    pub fn relative_helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Per-link relative Helmholtz free energy at fixed end-to-end length.
    pub fn relative_helmholtz_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_helmholtz_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let gamma = nondimensional_end_to_end_length_per_link;
        let kappa = self.kappa(temperature);
        let energy = self.energy(temperature);
        let eta = invert_extension(|eta| reduced_extension(eta, kappa, energy), gamma, kappa, energy);
        self.links() * (eta * gamma + reduced_relative_gibbs(eta, kappa, energy))
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(
            nondimensional_end_to_end_length_per_link,
            temperature,
        ) / self.links()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_legendre_force_inverts_isotensional_extension() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e6, 2.5e5);
        let temperature = 300.0;
        let kappa = facet.legendre.kappa(temperature);
        let energy = facet.legendre.energy(temperature);
        for gamma in [0.3, 0.7, 0.95] {
            let eta = facet.legendre.nondimensional_force(gamma, temperature);
            assert_relative_eq!(exact_extension(eta, kappa, energy), gamma, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_asymptotic_force_is_derivative_of_relative_helmholtz() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e6, 2.5e5);
        let temperature = 300.0;
        let gamma = 0.6;
        let h = 1e-6;
        let fd = (facet
            .asymptotic
            .nondimensional_relative_helmholtz_free_energy(gamma + h, temperature)
            - facet
                .asymptotic
                .nondimensional_relative_helmholtz_free_energy(gamma - h, temperature))
            / (2.0 * h)
            / 8.0;
        assert_relative_eq!(
            facet.asymptotic.nondimensional_force(gamma, temperature),
            fd,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_facets_agree_for_stiff_links() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e7, 2.5e6);
        let temperature = 300.0;
        let gamma = 0.5;
        let legendre = facet.legendre.nondimensional_force(gamma, temperature);
        let asymptotic = facet.asymptotic.nondimensional_force(gamma, temperature);
        let reduced = facet.asymptotic.reduced.nondimensional_force(gamma, temperature);
        assert_relative_eq!(legendre, asymptotic, max_relative = 1e-3);
        assert_relative_eq!(legendre, reduced, max_relative = 1e-1);
    }
}

//! Isometric thermodynamics of the extensible freely-jointed chain.
//!
//! The extensible chain has no closed-form configurational density, so the
//! fixed-length quantities invert the strictly increasing isotensional
//! force–extension map and Legendre-transform its free energy. The exact,
//! asymptotic, and reduced variants each invert their own extension map, so
//! every facet is the exact thermodynamic dual of its isotensional
//! counterpart. Unlike the rigid chain the extension per link may exceed one.

use super::isotensional::{
    asymptotic_extension, asymptotic_relative_gibbs, exact_extension, exact_relative_gibbs,
    reference_scale,
};
use crate::math::constants::BOLTZMANN_CONSTANT;
use crate::math::rootfind::invert_monotone;
use crate::math::special::{inverse_langevin, langevin, langevin_derivative, ln_sinhc};

/// Inverts an extension map `γ(η)` on a bracket guaranteed to contain the root.
///
/// Every variant extends at least as far as the stretch response `η/κ`, so
/// `κγ` bounds the root from above at any stiffness; below full extension the
/// rigid-chain inverse Langevin bounds it as well, and taking the smaller
/// bound keeps the bracket clear of the overflow range of the exact partition
/// factor at stiff links. The reduced slope `L'(η) + 1/κ` serves as the
/// Newton derivative for every variant.
fn invert_extension<F>(map: F, gamma: f64, kappa: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let upper = if gamma < 1.0 {
        (inverse_langevin(gamma) + 1.0).min(kappa * gamma)
    } else {
        kappa * gamma
    };
    invert_monotone(map, |eta| langevin_derivative(eta) + 1.0 / kappa, gamma, 0.0, upper)
}

/// The isometric view of the extensible freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    /// Gibbs quantities at the force conjugate to the given extension.
    pub legendre: IsometricLegendre,
    /// Stiff-link asymptotic expansion of the exact quantities.
    pub asymptotic: IsometricAsymptotic,
}

impl Isometric {
    pub(super) fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
    ) -> Self {
        Self {
            number_of_links,
            link_length,
            hinge_mass,
            link_stiffness,
            legendre: IsometricLegendre {
                number_of_links,
                link_length,
                link_stiffness,
            },
            asymptotic: IsometricAsymptotic {
                number_of_links,
                link_length,
                link_stiffness,
                reduced: IsometricAsymptoticReduced {
                    number_of_links,
                    link_length,
                    link_stiffness,
                },
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length), temperature)
            * BOLTZMANN_CONSTANT
            * temperature
            / self.link_length
    }

    /// Nondimensional force, the inverse of the exact isotensional extension map.
    pub fn nondimensional_force(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        invert_extension(
            |eta| exact_extension(eta, kappa),
            nondimensional_end_to_end_length_per_link,
            kappa,
        )
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
            * self.nondimensional_relative_helmholtz_free_energy(self.gamma(end_to_end_length), temperature)
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
        let eta = invert_extension(|eta| exact_extension(eta, kappa), gamma, kappa);
        self.links() * (eta * gamma + exact_relative_gibbs(eta, kappa))
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

/// Gibbs quantities of the extensible chain at fixed end-to-end length.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricLegendre {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
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

    fn conjugate_force(&self, gamma: f64, kappa: f64) -> f64 {
        invert_extension(|eta| exact_extension(eta, kappa), gamma, kappa)
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
        self.conjugate_force(nondimensional_end_to_end_length_per_link, self.kappa(temperature))
    }

    /// Relative Gibbs free energy at the force conjugate to the given extension.
    pub fn relative_gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_gibbs_free_energy(self.gamma(end_to_end_length), temperature)
    }

    /// Per-link relative Gibbs free energy at the conjugate force.
    pub fn relative_gibbs_free_energy_per_link(
        &self,
        end_to_end_length: f64,
        temperature: f64,
    ) -> f64 {
        self.relative_gibbs_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Nondimensional relative Gibbs free energy at the conjugate force.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        let eta = self.conjugate_force(nondimensional_end_to_end_length_per_link, kappa);
        self.links() * exact_relative_gibbs(eta, kappa)
    }

    /// Nondimensional relative Gibbs free energy per link at the conjugate force.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_gibbs_free_energy(
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
        invert_extension(
            |eta| asymptotic_extension(eta, kappa),
            nondimensional_end_to_end_length_per_link,
            kappa,
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
        let eta = invert_extension(|eta| asymptotic_extension(eta, kappa), gamma, kappa);
        self.links() * (eta * gamma + asymptotic_relative_gibbs(eta, kappa))
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

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length), temperature)
            * BOLTZMANN_CONSTANT
            * temperature
            / self.link_length
    }

    /// Nondimensional force, the inverse of `γ = L(η) + η/κ`.
    pub fn nondimensional_force(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        invert_extension(
            |eta| langevin(eta) + eta / kappa,
            nondimensional_end_to_end_length_per_link,
            kappa,
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
        let eta = invert_extension(|eta| langevin(eta) + eta / kappa, gamma, kappa);
        self.links() * (eta * gamma - ln_sinhc(eta) - eta.powi(2) / (2.0 * kappa))
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
    fn test_force_inverts_isotensional_extension() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e6);
        let temperature = 300.0;
        let kappa = facet.kappa(temperature);
        for gamma in [0.25, 0.7, 0.97, 1.02] {
            let eta = facet.nondimensional_force(gamma, temperature);
            assert_relative_eq!(exact_extension(eta, kappa), gamma, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_extension_past_unity_is_reachable() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e6);
        let eta = facet.nondimensional_force(1.05, 300.0);
        assert!(eta.is_finite() && eta > 0.0);
    }

    #[test]
    fn test_force_is_derivative_of_relative_helmholtz() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e6);
        let temperature = 300.0;
        let gamma = 0.6;
        let h = 1e-6;
        let fd = (facet.nondimensional_relative_helmholtz_free_energy(gamma + h, temperature)
            - facet.nondimensional_relative_helmholtz_free_energy(gamma - h, temperature))
            / (2.0 * h)
            / 8.0;
        assert_relative_eq!(
            facet.nondimensional_force(gamma, temperature),
            fd,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_asymptotic_and_reduced_agree_for_stiff_links() {
        let facet = Isometric::new(8, 1.0, 1.0, 1.25e8);
        let temperature = 300.0;
        let gamma = 0.5;
        let exact = facet.nondimensional_force(gamma, temperature);
        let asymptotic = facet.asymptotic.nondimensional_force(gamma, temperature);
        let reduced = facet.asymptotic.reduced.nondimensional_force(gamma, temperature);
        assert_relative_eq!(exact, asymptotic, max_relative = 1e-6);
        assert_relative_eq!(exact, reduced, max_relative = 1e-4);
        let kappa = facet.kappa(temperature);
        assert_relative_eq!(exact_extension(exact, kappa), gamma, max_relative = 1e-9);
    }
}

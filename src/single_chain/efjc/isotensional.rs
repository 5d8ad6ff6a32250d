//! Isotensional thermodynamics of the extensible freely-jointed chain.
//!
//! With a harmonic stretch energy on each link the single-link partition
//! function is still closed-form: integrating the stretch Gaussian against the
//! rotational `sinh` kernel gives
//! `z(η) ∝ (1/η)·e^(η²/2κ)·[a₊e^η(1 + erf(c·a₊)) − a₋e^(−η)(1 + erf(c·a₋))]`
//! with `a± = 1 ± η/κ` and `c = √(κ/2)`, where `κ = k·ℓ²/(kB·T)` is the
//! nondimensional link stiffness. The asymptotic facet expands this for stiff
//! links and the reduced facet keeps only the leading extensibility term.

use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use crate::math::special::{langevin, ln_sinhc};
use libm::erf;

/// The bracketed partition factor `B(η) = a₊e^η(1+erf(c·a₊)) − a₋e^(−η)(1+erf(c·a₋))`.
#[inline]
pub(super) fn partition_factor(eta: f64, kappa: f64) -> f64 {
    let c = (kappa / 2.0).sqrt();
    let a_plus = 1.0 + eta / kappa;
    let a_minus = 1.0 - eta / kappa;
    a_plus * eta.exp() * (1.0 + erf(c * a_plus))
        - a_minus * (-eta).exp() * (1.0 + erf(c * a_minus))
}

/// Derivative `B'(η)`; at `η = 0` this is the zero-force reference `z(0)` scale.
#[inline]
pub(super) fn partition_factor_derivative(eta: f64, kappa: f64) -> f64 {
    let c = (kappa / 2.0).sqrt();
    let a_plus = 1.0 + eta / kappa;
    let a_minus = 1.0 - eta / kappa;
    eta.exp() * (1.0 + erf(c * a_plus)) * (a_plus + 1.0 / kappa)
        + (-eta).exp() * (1.0 + erf(c * a_minus)) * (a_minus + 1.0 / kappa)
        + 4.0 * c / (kappa * std::f64::consts::PI.sqrt())
            * (-kappa / 2.0 - eta.powi(2) / (2.0 * kappa)).exp()
}

/// Exact nondimensional extension per link, `η/κ − 1/η + B'(η)/B(η)`.
#[inline]
pub(super) fn exact_extension(eta: f64, kappa: f64) -> f64 {
    eta / kappa - 1.0 / eta + partition_factor_derivative(eta, kappa) / partition_factor(eta, kappa)
}

/// Exact nondimensional relative Gibbs free energy per link, `−ln(z(η)/z(0))`.
#[inline]
pub(super) fn exact_relative_gibbs(eta: f64, kappa: f64) -> f64 {
    -eta.powi(2) / (2.0 * kappa)
        - (partition_factor(eta, kappa) / (eta * partition_factor_derivative(0.0, kappa))).ln()
}

/// Asymptotic nondimensional extension per link for stiff links.
#[inline]
pub(super) fn asymptotic_extension(eta: f64, kappa: f64) -> f64 {
    let coth = 1.0 / eta.tanh();
    let l = langevin(eta);
    l + eta / kappa * (1.0 + (1.0 - l * coth) / (1.0 + eta / kappa * coth))
}

/// Asymptotic nondimensional relative Gibbs free energy per link.
#[inline]
pub(super) fn asymptotic_relative_gibbs(eta: f64, kappa: f64) -> f64 {
    let correction = if eta == 0.0 { 1.0 / kappa } else { eta / (kappa * eta.tanh()) };
    -ln_sinhc(eta) - eta.powi(2) / (2.0 * kappa)
        - ((1.0 + correction) / (1.0 + 1.0 / kappa)).ln()
}

/// Per-link reference constant of the absolute free energies, `ln Λ(T) + ½·ln(2π/κ)`.
#[inline]
pub(super) fn reference_scale(hinge_mass: f64, link_length: f64, kappa: f64, temperature: f64) -> f64 {
    rotational_partition_factor(hinge_mass, link_length, temperature).ln()
        + 0.5 * (2.0 * std::f64::consts::PI / kappa).ln()
}

/// The isotensional view of the extensible freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    /// Legendre transform into Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
    /// Stiff-link asymptotic expansion of the exact quantities.
    pub asymptotic: IsotensionalAsymptotic,
}

impl Isotensional {
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
            legendre: IsotensionalLegendre {
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
            },
            asymptotic: IsotensionalAsymptotic {
                number_of_links,
                link_length,
                link_stiffness,
                reduced: IsotensionalAsymptoticReduced {
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

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * exact_extension(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * exact_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        exact_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Gibbs free energy under fixed force.
    pub fn gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Gibbs free energy per link under fixed force.
    pub fn gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_gibbs_free_energy_per_link(self.eta(force, temperature), temperature)
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * exact_relative_gibbs(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.nondimensional_gibbs_free_energy_per_link(nondimensional_force, temperature) * self.links()
    }

    /// Nondimensional Gibbs free energy per link.
    pub fn nondimensional_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        exact_relative_gibbs(nondimensional_force, kappa)
            - reference_scale(self.hinge_mass, self.link_length, kappa, temperature)
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links() * exact_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        exact_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }
}

/// Helmholtz quantities of the extensible chain as functions of force.
///
/// Legendre transforms of the exact isotensional quantities. The additive
/// correction now carries both the hinge rotation and the Gaussian stretch
/// fluctuation that fixing the end-to-end vector freezes out.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
}

impl IsotensionalLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Helmholtz free energy at the extension conjugate to `force`.
    pub fn helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.eta(force, temperature), temperature)
    }

    /// Helmholtz free energy per link at the extension conjugate to `force`.
    pub fn helmholtz_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(force, temperature) / self.links()
    }

    /// Relative Helmholtz free energy at the extension conjugate to `force`.
    pub fn relative_helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_helmholtz_free_energy(self.eta(force, temperature), temperature)
    }

    /// Per-link relative Helmholtz free energy at the extension conjugate to `force`.
    pub fn relative_helmholtz_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.relative_helmholtz_free_energy(force, temperature) / self.links()
    }

    /// Nondimensional Helmholtz free energy.
    pub fn nondimensional_helmholtz_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force, temperature)
            - (self.links() - 1.0)
                * reference_scale(self.hinge_mass, self.link_length, kappa, temperature)
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_force, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·(η·γ(η) + ḡ_rel(η))`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links()
            * self.nondimensional_relative_helmholtz_free_energy_per_link(nondimensional_force, temperature)
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        let kappa = self.kappa(temperature);
        nondimensional_force * exact_extension(nondimensional_force, kappa)
            + exact_relative_gibbs(nondimensional_force, kappa)
    }
}

/// Stiff-link asymptotic expansion of the isotensional quantities.
///
/// Valid for `κ ≫ 1`, with residual of order `κ⁻²` in the extension map. The
/// nested `reduced` facet keeps only the leading `η/κ` extensibility term,
/// with residual of order `κ⁻¹`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalAsymptotic {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
    /// Leading-order truncation of the expansion.
    pub reduced: IsotensionalAsymptoticReduced,
}

impl IsotensionalAsymptotic {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * asymptotic_extension(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * asymptotic_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        asymptotic_extension(nondimensional_force, self.kappa(temperature))
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * asymptotic_relative_gibbs(self.eta(force, temperature), self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links() * asymptotic_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        asymptotic_relative_gibbs(nondimensional_force, self.kappa(temperature))
    }
}

/// Leading-order truncation of the stiff-link expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalAsymptoticReduced {
    number_of_links: u8,
    link_length: f64,
    link_stiffness: f64,
}

impl IsotensionalAsymptoticReduced {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn kappa(&self, temperature: f64) -> f64 {
        self.link_stiffness * self.link_length.powi(2) / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link, `ℓ·(L(η) + η/κ)`.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        let eta = self.eta(force, temperature);
        self.link_length * (langevin(eta) + eta / self.kappa(temperature))
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.links() * self.nondimensional_end_to_end_length_per_link(nondimensional_force, temperature)
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        langevin(nondimensional_force) + nondimensional_force / self.kappa(temperature)
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        let eta = self.eta(force, temperature);
        BOLTZMANN_CONSTANT
            * temperature
            * (-ln_sinhc(eta) - eta.powi(2) / (2.0 * self.kappa(temperature)))
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.links()
            * self.nondimensional_relative_gibbs_free_energy_per_link(nondimensional_force, temperature)
    }

    /// Nondimensional relative Gibbs free energy per link, `−ln(sinh η/η) − η²/(2κ)`.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        -ln_sinhc(nondimensional_force)
            - nondimensional_force.powi(2) / (2.0 * self.kappa(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const KAPPA: f64 = 500.0;

    #[test]
    fn test_exact_extension_is_gibbs_derivative() {
        let h = 1e-6;
        for eta in [0.3, 1.0, 4.0] {
            let fd = -(exact_relative_gibbs(eta + h, KAPPA) - exact_relative_gibbs(eta - h, KAPPA))
                / (2.0 * h);
            assert_relative_eq!(exact_extension(eta, KAPPA), fd, max_relative = 1e-7);
        }
    }

    #[test]
    fn test_asymptotic_extension_is_gibbs_derivative() {
        let h = 1e-6;
        for eta in [0.3, 1.0, 4.0] {
            let fd = -(asymptotic_relative_gibbs(eta + h, KAPPA)
                - asymptotic_relative_gibbs(eta - h, KAPPA))
                / (2.0 * h);
            assert_relative_eq!(asymptotic_extension(eta, KAPPA), fd, max_relative = 1e-7);
        }
    }

    #[test]
    fn test_asymptotic_matches_exact_for_stiff_links() {
        for eta in [0.5, 2.0, 8.0] {
            assert_relative_eq!(
                asymptotic_extension(eta, 1e4),
                exact_extension(eta, 1e4),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn test_extensibility_raises_extension_above_langevin() {
        for eta in [0.5, 2.0, 8.0] {
            assert!(exact_extension(eta, KAPPA) > langevin(eta));
        }
    }

    #[test]
    fn test_relative_gibbs_vanishes_at_zero_force() {
        assert!(exact_relative_gibbs(1e-4, KAPPA).abs() < 1e-7);
        assert!(asymptotic_relative_gibbs(1e-4, KAPPA).abs() < 1e-7);
    }

    #[test]
    fn test_legendre_relation_against_direct_quantities() {
        let facet = Isotensional::new(8, 1.0, 1.0, 1.25e6);
        let temperature = 300.0;
        let eta: f64 = 1.7;
        let force = eta * BOLTZMANN_CONSTANT * temperature;
        let direct = facet.relative_gibbs_free_energy(force, temperature)
            + force * facet.end_to_end_length(force, temperature);
        assert_relative_eq!(
            facet.legendre.relative_helmholtz_free_energy(force, temperature),
            direct,
            max_relative = 1e-10
        );
    }
}

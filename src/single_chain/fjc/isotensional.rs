//! Isotensional (fixed-force) thermodynamics of the freely-jointed chain.
//!
//! The single-link partition function factorizes, so the chain quantities are
//! `N` times the link ones: extension per link is the Langevin function of the
//! nondimensional force and the relative Gibbs free energy per link is
//! `−ln(sinh η/η)`. Absolute energies carry one rotational partition factor
//! `Λ(T)` per link.

use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};
use crate::math::special::{langevin, ln_sinhc};

/// The isotensional view of the freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Legendre transform into Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
}

impl Isotensional {
    pub(super) fn new(number_of_links: u8, link_length: f64, hinge_mass: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            hinge_mass,
            legendre: IsotensionalLegendre {
                number_of_links,
                link_length,
                hinge_mass,
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.link_length * langevin(self.eta(force, temperature))
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * langevin(self.eta(force, temperature))
    }

    /// Nondimensional end-to-end length, `N·L(η)`.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64) -> f64 {
        self.links() * langevin(nondimensional_force)
    }

    /// Nondimensional end-to-end length per link, the Langevin function `L(η)`.
    pub fn nondimensional_end_to_end_length_per_link(&self, nondimensional_force: f64) -> f64 {
        langevin(nondimensional_force)
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
        -BOLTZMANN_CONSTANT * temperature * ln_sinhc(self.eta(force, temperature))
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.nondimensional_gibbs_free_energy_per_link(nondimensional_force, temperature)
            * self.links()
    }

    /// Nondimensional Gibbs free energy per link, `−ln(sinh η/η) − ln Λ(T)`.
    pub fn nondimensional_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        -ln_sinhc(nondimensional_force)
            - rotational_partition_factor(self.hinge_mass, self.link_length, temperature).ln()
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(&self, nondimensional_force: f64) -> f64 {
        -self.links() * ln_sinhc(nondimensional_force)
    }

    /// Nondimensional relative Gibbs free energy per link, `−ln(sinh η/η)`.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        -ln_sinhc(nondimensional_force)
    }
}

/// Helmholtz quantities of the freely-jointed chain as functions of force.
///
/// These are Legendre transforms of the closed-form isotensional quantities:
/// `F = G + f·x(f) + kB·T·ln Λ(T)`, the additive term accounting for the
/// hinge rotation that the fixed end-to-end vector freezes out.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalLegendre {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
}

impl IsotensionalLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
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
            * self.nondimensional_relative_helmholtz_free_energy(self.eta(force, temperature))
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
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force)
            - (self.links() - 1.0) * lambda.ln()
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_force, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·(η·L(η) − ln(sinh η/η))`.
    pub fn nondimensional_relative_helmholtz_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.links()
            * self.nondimensional_relative_helmholtz_free_energy_per_link(nondimensional_force)
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
    ) -> f64 {
        nondimensional_force * langevin(nondimensional_force) - ln_sinhc(nondimensional_force)
    }
}

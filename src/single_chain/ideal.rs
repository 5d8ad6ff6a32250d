//! The ideal (Gaussian) chain.
//!
//! Entropic elasticity with no finite-extensibility limit: the isotensional
//! extension is linear in force, `γ = η/3`, and the isometric force law is its
//! exact inverse, `η = 3γ`. The two ensembles are exact Legendre duals at any
//! number of links, which makes this model the reference case for the duality
//! and connection identities satisfied only asymptotically elsewhere.

use crate::error::{check_number_of_links, check_positive, ChainError};
use crate::math::constants::{rotational_partition_factor, BOLTZMANN_CONSTANT};

/// The ideal chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Ideal {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl Ideal {
    /// Creates an ideal chain, validating all parameters.
    pub fn new(number_of_links: u8, link_length: f64, hinge_mass: f64) -> Result<Self, ChainError> {
        let number_of_links = check_number_of_links(number_of_links)?;
        let link_length = check_positive("link_length", link_length)?;
        let hinge_mass = check_positive("hinge_mass", hinge_mass)?;
        Ok(Self {
            number_of_links,
            link_length,
            hinge_mass,
            thermodynamics: Thermodynamics::new(number_of_links, link_length, hinge_mass),
        })
    }

    /// The number of links in the chain.
    pub fn number_of_links(&self) -> u8 {
        self.number_of_links
    }

    /// The link length in nm.
    pub fn link_length(&self) -> f64 {
        self.link_length
    }

    /// The hinge mass in kg/mol.
    pub fn hinge_mass(&self) -> f64 {
        self.hinge_mass
    }
}

/// Ensemble facets of the ideal chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
}

impl Thermodynamics {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64) -> Self {
        Self {
            isotensional: Isotensional {
                number_of_links,
                link_length,
                hinge_mass,
                legendre: IsotensionalLegendre {
                    number_of_links,
                    link_length,
                    hinge_mass,
                },
            },
            isometric: Isometric {
                number_of_links,
                link_length,
                hinge_mass,
                legendre: IsometricLegendre {
                    number_of_links,
                    link_length,
                    hinge_mass,
                },
            },
        }
    }
}

/// The isotensional (fixed-force) view of the ideal chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Legendre transform into Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
}

impl Isotensional {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        let eta = force * self.link_length / (BOLTZMANN_CONSTANT * temperature);
        self.links() * self.link_length * eta / 3.0
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.end_to_end_length(force, temperature) / self.links()
    }

    /// Nondimensional end-to-end length as a function of nondimensional force.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64) -> f64 {
        self.links() * nondimensional_force / 3.0
    }

    /// Nondimensional end-to-end length per link, `γ(η) = η/3`.
    pub fn nondimensional_end_to_end_length_per_link(&self, nondimensional_force: f64) -> f64 {
        nondimensional_force / 3.0
    }

    /// Gibbs free energy under fixed force.
    pub fn gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Gibbs free energy per link under fixed force.
    pub fn gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        let eta = force * self.link_length / (BOLTZMANN_CONSTANT * temperature);
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_gibbs_free_energy_per_link(eta, temperature)
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy_per_link(force, temperature) * self.links()
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        let eta = force * self.link_length / (BOLTZMANN_CONSTANT * temperature);
        BOLTZMANN_CONSTANT * temperature * self.nondimensional_relative_gibbs_free_energy_per_link(eta)
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(&self, nondimensional_force: f64, temperature: f64) -> f64 {
        self.nondimensional_gibbs_free_energy_per_link(nondimensional_force, temperature)
            * self.links()
    }

    /// Nondimensional Gibbs free energy per link, `−η²/6 − ln Λ(T)`.
    pub fn nondimensional_gibbs_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_relative_gibbs_free_energy_per_link(nondimensional_force)
            - rotational_partition_factor(self.hinge_mass, self.link_length, temperature).ln()
    }

    /// Nondimensional relative Gibbs free energy.
    pub fn nondimensional_relative_gibbs_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_relative_gibbs_free_energy_per_link(nondimensional_force) * self.links()
    }

    /// Nondimensional relative Gibbs free energy per link, `−η²/6`.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        -nondimensional_force.powi(2) / 6.0
    }
}

/// Helmholtz quantities of the ideal chain as functions of force.
///
/// Exact at every link count: `F(x(f)) = G(f) + f·x(f) + kB·T·ln Λ(T)`.
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

    /// Helmholtz free energy at the extension conjugate to `force`.
    pub fn helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        let eta = force * self.link_length / (BOLTZMANN_CONSTANT * temperature);
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        BOLTZMANN_CONSTANT
            * temperature
            * (self.links() * eta.powi(2) / 6.0 - (self.links() - 1.0) * lambda.ln())
    }

    /// Helmholtz free energy per link at the extension conjugate to `force`.
    pub fn helmholtz_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.helmholtz_free_energy(force, temperature) / self.links()
    }

    /// Relative Helmholtz free energy at the extension conjugate to `force`.
    pub fn relative_helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        let eta = force * self.link_length / (BOLTZMANN_CONSTANT * temperature);
        BOLTZMANN_CONSTANT * temperature * self.links() * eta.powi(2) / 6.0
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
        self.links() * nondimensional_force.powi(2) / 6.0 - (self.links() - 1.0) * lambda.ln()
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
        temperature: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_force, temperature) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·η²/6`.
    pub fn nondimensional_relative_helmholtz_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.links() * nondimensional_force.powi(2) / 6.0
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
    ) -> f64 {
        nondimensional_force.powi(2) / 6.0
    }
}

/// The isometric (fixed-length) view of the ideal chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Gibbs quantities and the inverse force law as functions of extension.
    pub legendre: IsometricLegendre,
}

impl Isometric {
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

    /// Nondimensional force, `η(γ) = 3γ`.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        3.0 * nondimensional_end_to_end_length_per_link
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

    /// Nondimensional Helmholtz free energy, `3Nγ²/2 − (N−1)·ln Λ(T)`.
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

    /// Nondimensional relative Helmholtz free energy, `3Nγ²/2`.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy_per_link(
            nondimensional_end_to_end_length_per_link,
        ) * self.links()
    }

    /// Nondimensional relative Helmholtz free energy per link, `3γ²/2`.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        1.5 * nondimensional_end_to_end_length_per_link.powi(2)
    }
}

/// Force and Gibbs quantities of the ideal chain as functions of extension.
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
        3.0 * self.gamma(end_to_end_length) * BOLTZMANN_CONSTANT * temperature / self.link_length
    }

    /// Nondimensional force recovered by inverting the isotensional map.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        3.0 * nondimensional_end_to_end_length_per_link
    }

    /// Gibbs free energy at fixed extension, `F(x) − f(x)·x − kB·T·ln Λ(T)`.
    pub fn gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        let gamma = self.gamma(end_to_end_length);
        let lambda = rotational_partition_factor(self.hinge_mass, self.link_length, temperature);
        BOLTZMANN_CONSTANT
            * temperature
            * (-1.5 * self.links() * gamma.powi(2) - self.links() * lambda.ln())
    }

    /// Gibbs free energy per link at fixed extension.
    pub fn gibbs_free_energy_per_link(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.gibbs_free_energy(end_to_end_length, temperature) / self.links()
    }

    /// Relative Gibbs free energy at fixed extension.
    pub fn relative_gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        let gamma = self.gamma(end_to_end_length);
        -1.5 * self.links() * gamma.powi(2) * BOLTZMANN_CONSTANT * temperature
    }

    /// Per-link relative Gibbs free energy at fixed extension.
    pub fn relative_gibbs_free_energy_per_link(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy(end_to_end_length, temperature) / self.links()
    }
}

//! The worm-like chain.
//!
//! A semiflexible chain of contour length `N·ℓ` and persistence length `ℓ_p`,
//! described by the Marko–Siggia interpolation. The natural ensemble is
//! isometric: the relative Helmholtz free energy per link is
//! `(1/ζ)·(γ²/2 + 1/(4(1−γ)) − γ/4 − 1/4)` with `ζ = ℓ_p/ℓ`, whose extension
//! derivative gives the familiar force law diverging at full extension. The
//! isotensional ensemble inverts that force law; the chain-level reference of
//! the absolute free energies is the configurational factor
//! `4·sin(arccos(e^(−N·ℓ/ℓ_p)))` that replaces the hinge-rotation factor of
//! the freely-jointed family.

use crate::error::{check_number_of_links, check_positive, ChainError};
use crate::math::constants::BOLTZMANN_CONSTANT;
use crate::math::rootfind::invert_monotone;

/// Marko–Siggia nondimensional force at per-link extension `γ`.
#[inline]
fn force_law(gamma: f64, stiffness: f64) -> f64 {
    (gamma + 0.25 / (1.0 - gamma).powi(2) - 0.25) / stiffness
}

/// Extension derivative of the force law, for the Newton steps of the inversion.
#[inline]
fn force_law_derivative(gamma: f64, stiffness: f64) -> f64 {
    (1.0 + 0.5 / (1.0 - gamma).powi(3)) / stiffness
}

/// Marko–Siggia relative Helmholtz free energy per link at extension `γ`.
#[inline]
fn energy_density(gamma: f64, stiffness: f64) -> f64 {
    (gamma.powi(2) / 2.0 + 0.25 / (1.0 - gamma) - gamma / 4.0 - 0.25) / stiffness
}

/// Per-link extension conjugate to the nondimensional force `η`.
#[inline]
fn inverse_force_law(eta: f64, stiffness: f64) -> f64 {
    invert_monotone(
        |gamma| force_law(gamma, stiffness),
        |gamma| force_law_derivative(gamma, stiffness),
        eta,
        0.0,
        1.0 - 1e-12,
    )
}

/// Chain-level configurational reference, `ln(4·sin(arccos(e^(−N/ζ))))`.
#[inline]
fn reference_scale(number_of_links: f64, stiffness: f64) -> f64 {
    (4.0 * (1.0 - (-2.0 * number_of_links / stiffness).exp()).sqrt()).ln()
}

/// The worm-like chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Wlc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    persistence_length: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl Wlc {
    /// Creates a worm-like chain, validating all parameters.
    pub fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        persistence_length: f64,
    ) -> Result<Self, ChainError> {
        let number_of_links = check_number_of_links(number_of_links)?;
        let link_length = check_positive("link_length", link_length)?;
        let hinge_mass = check_positive("hinge_mass", hinge_mass)?;
        let persistence_length = check_positive("persistence_length", persistence_length)?;
        Ok(Self {
            number_of_links,
            link_length,
            hinge_mass,
            persistence_length,
            thermodynamics: Thermodynamics::new(number_of_links, link_length, persistence_length),
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

    /// The persistence length in nm.
    pub fn persistence_length(&self) -> f64 {
        self.persistence_length
    }
}

/// Ensemble facets of the worm-like chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
}

impl Thermodynamics {
    fn new(number_of_links: u8, link_length: f64, persistence_length: f64) -> Self {
        Self {
            isotensional: Isotensional::new(number_of_links, link_length, persistence_length),
            isometric: Isometric::new(number_of_links, link_length, persistence_length),
        }
    }
}

/// The isometric view of the worm-like chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isometric {
    number_of_links: u8,
    link_length: f64,
    persistence_length: f64,
    /// Gibbs quantities at the force conjugate to the given extension.
    pub legendre: IsometricLegendre,
}

impl Isometric {
    fn new(number_of_links: u8, link_length: f64, persistence_length: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            persistence_length,
            legendre: IsometricLegendre {
                number_of_links,
                link_length,
                persistence_length,
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn stiffness(&self) -> f64 {
        self.persistence_length / self.link_length
    }

    /// Expected force at fixed end-to-end length.
    pub fn force(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        self.nondimensional_force(self.gamma(end_to_end_length)) * BOLTZMANN_CONSTANT * temperature
            / self.link_length
    }

    /// Nondimensional force, the Marko–Siggia interpolation.
    pub fn nondimensional_force(&self, nondimensional_end_to_end_length_per_link: f64) -> f64 {
        force_law(nondimensional_end_to_end_length_per_link, self.stiffness())
    }

    /// Helmholtz free energy at fixed end-to-end length.
    pub fn helmholtz_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.gamma(end_to_end_length))
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
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            - reference_scale(self.links(), self.stiffness())
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_end_to_end_length_per_link)
            / self.links()
    }

    /// Nondimensional relative Helmholtz free energy.
    pub fn nondimensional_relative_helmholtz_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.links() * energy_density(nondimensional_end_to_end_length_per_link, self.stiffness())
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        energy_density(nondimensional_end_to_end_length_per_link, self.stiffness())
    }
}

/// Gibbs quantities of the worm-like chain at fixed end-to-end length.
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricLegendre {
    number_of_links: u8,
    link_length: f64,
    persistence_length: f64,
}

impl IsometricLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn gamma(&self, end_to_end_length: f64) -> f64 {
        end_to_end_length / (self.links() * self.link_length)
    }

    fn stiffness(&self) -> f64 {
        self.persistence_length / self.link_length
    }

    /// Gibbs free energy at the force conjugate to the given extension.
    pub fn gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_gibbs_free_energy(self.gamma(end_to_end_length))
    }

    /// Relative Gibbs free energy at the force conjugate to the given extension.
    pub fn relative_gibbs_free_energy(&self, end_to_end_length: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_gibbs_free_energy(self.gamma(end_to_end_length))
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        self.nondimensional_relative_gibbs_free_energy(nondimensional_end_to_end_length_per_link)
            - reference_scale(self.links(), self.stiffness())
    }

    /// Nondimensional relative Gibbs free energy, `ψ̃_rel(γ) − N·η(γ)·γ`.
    pub fn nondimensional_relative_gibbs_free_energy(
        &self,
        nondimensional_end_to_end_length_per_link: f64,
    ) -> f64 {
        let gamma = nondimensional_end_to_end_length_per_link;
        let stiffness = self.stiffness();
        self.links() * (energy_density(gamma, stiffness) - force_law(gamma, stiffness) * gamma)
    }
}

/// The isotensional view of the worm-like chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Isotensional {
    number_of_links: u8,
    link_length: f64,
    persistence_length: f64,
    /// Helmholtz quantities as functions of force.
    pub legendre: IsotensionalLegendre,
}

impl Isotensional {
    fn new(number_of_links: u8, link_length: f64, persistence_length: f64) -> Self {
        Self {
            number_of_links,
            link_length,
            persistence_length,
            legendre: IsotensionalLegendre {
                number_of_links,
                link_length,
                persistence_length,
            },
        }
    }

    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn stiffness(&self) -> f64 {
        self.persistence_length / self.link_length
    }

    /// Expected end-to-end length under fixed force.
    pub fn end_to_end_length(&self, force: f64, temperature: f64) -> f64 {
        self.links() * self.end_to_end_length_per_link(force, temperature)
    }

    /// Expected end-to-end length per link under fixed force.
    pub fn end_to_end_length_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.link_length * inverse_force_law(self.eta(force, temperature), self.stiffness())
    }

    /// Nondimensional end-to-end length in link units.
    pub fn nondimensional_end_to_end_length(&self, nondimensional_force: f64) -> f64 {
        self.links() * inverse_force_law(nondimensional_force, self.stiffness())
    }

    /// Nondimensional end-to-end length per link.
    pub fn nondimensional_end_to_end_length_per_link(&self, nondimensional_force: f64) -> f64 {
        inverse_force_law(nondimensional_force, self.stiffness())
    }

    /// Gibbs free energy under fixed force.
    pub fn gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_gibbs_free_energy(self.eta(force, temperature))
    }

    /// Gibbs free energy per link under fixed force.
    pub fn gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.gibbs_free_energy(force, temperature) / self.links()
    }

    /// Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_relative_gibbs_free_energy(self.eta(force, temperature))
    }

    /// Per-link Gibbs free energy relative to the zero-force reference.
    pub fn relative_gibbs_free_energy_per_link(&self, force: f64, temperature: f64) -> f64 {
        self.relative_gibbs_free_energy(force, temperature) / self.links()
    }

    /// Nondimensional Gibbs free energy.
    pub fn nondimensional_gibbs_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_relative_gibbs_free_energy(nondimensional_force)
            - reference_scale(self.links(), self.stiffness())
    }

    /// Nondimensional Gibbs free energy per link.
    pub fn nondimensional_gibbs_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_gibbs_free_energy(nondimensional_force) / self.links()
    }

    /// Nondimensional relative Gibbs free energy, `N·(ψ̃_rel(γ*) − η·γ*)`.
    pub fn nondimensional_relative_gibbs_free_energy(&self, nondimensional_force: f64) -> f64 {
        let stiffness = self.stiffness();
        let gamma = inverse_force_law(nondimensional_force, stiffness);
        self.links() * (energy_density(gamma, stiffness) - nondimensional_force * gamma)
    }

    /// Nondimensional relative Gibbs free energy per link.
    pub fn nondimensional_relative_gibbs_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_relative_gibbs_free_energy(nondimensional_force) / self.links()
    }
}

/// Helmholtz quantities of the worm-like chain as functions of force.
#[derive(Debug, Clone, PartialEq)]
pub struct IsotensionalLegendre {
    number_of_links: u8,
    link_length: f64,
    persistence_length: f64,
}

impl IsotensionalLegendre {
    fn links(&self) -> f64 {
        self.number_of_links as f64
    }

    fn eta(&self, force: f64, temperature: f64) -> f64 {
        force * self.link_length / (BOLTZMANN_CONSTANT * temperature)
    }

    fn stiffness(&self) -> f64 {
        self.persistence_length / self.link_length
    }

    /// Helmholtz free energy at the extension conjugate to `force`.
    pub fn helmholtz_free_energy(&self, force: f64, temperature: f64) -> f64 {
        BOLTZMANN_CONSTANT
            * temperature
            * self.nondimensional_helmholtz_free_energy(self.eta(force, temperature))
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
    pub fn nondimensional_helmholtz_free_energy(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force)
            - reference_scale(self.links(), self.stiffness())
    }

    /// Nondimensional Helmholtz free energy per link.
    pub fn nondimensional_helmholtz_free_energy_per_link(&self, nondimensional_force: f64) -> f64 {
        self.nondimensional_helmholtz_free_energy(nondimensional_force) / self.links()
    }

    /// Nondimensional relative Helmholtz free energy, `N·ψ̃_rel(γ*(η))`.
    pub fn nondimensional_relative_helmholtz_free_energy(&self, nondimensional_force: f64) -> f64 {
        let stiffness = self.stiffness();
        let gamma = inverse_force_law(nondimensional_force, stiffness);
        self.links() * energy_density(gamma, stiffness)
    }

    /// Nondimensional relative Helmholtz free energy per link.
    pub fn nondimensional_relative_helmholtz_free_energy_per_link(
        &self,
        nondimensional_force: f64,
    ) -> f64 {
        self.nondimensional_relative_helmholtz_free_energy(nondimensional_force) / self.links()
    }
}

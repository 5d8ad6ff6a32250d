//! The freely-jointed chain with Morse link potentials.
//!
//! Each link stretches in a Morse well `u(λ) = u_b·(1 − e^(−a(λ−1)))²` with
//! depth `u_b = link_energy/(kB·T)` and inverse width `a = √(κ/(2u_b))`, so
//! the curvature at the rest stretch again equals the link stiffness. Unlike
//! the Lennard-Jones link the mechanical inverse is closed-form, and the bond
//! can dissociate: the link force peaks at `η_max = u_b·a/2`, reached at the
//! inflection stretch `λ_max = 1 + ln 2/a`.

mod isometric;
mod isotensional;
mod link_potential;

pub use isometric::{Isometric, IsometricAsymptotic, IsometricAsymptoticReduced, IsometricLegendre};
pub use isotensional::{
    Isotensional, IsotensionalAsymptotic, IsotensionalAsymptoticReduced, IsotensionalLegendre,
};

use crate::error::{check_number_of_links, check_positive, ChainError};

/// The Morse freely-jointed chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct MorseFjc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    link_energy: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl MorseFjc {
    /// Creates a Morse freely-jointed chain, validating all parameters.
    pub fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
        link_energy: f64,
    ) -> Result<Self, ChainError> {
        let number_of_links = check_number_of_links(number_of_links)?;
        let link_length = check_positive("link_length", link_length)?;
        let hinge_mass = check_positive("hinge_mass", hinge_mass)?;
        let link_stiffness = check_positive("link_stiffness", link_stiffness)?;
        let link_energy = check_positive("link_energy", link_energy)?;
        Ok(Self {
            number_of_links,
            link_length,
            hinge_mass,
            link_stiffness,
            link_energy,
            thermodynamics: Thermodynamics::new(
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
                link_energy,
            ),
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

    /// The rest-length curvature of the link potential in J/(mol·nm²).
    pub fn link_stiffness(&self) -> f64 {
        self.link_stiffness
    }

    /// The dissociation energy of a link in J/mol.
    pub fn link_energy(&self) -> f64 {
        self.link_energy
    }
}

/// Ensemble facets of the Morse freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
}

impl Thermodynamics {
    fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
        link_energy: f64,
    ) -> Self {
        Self {
            isotensional: Isotensional::new(
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
                link_energy,
            ),
            isometric: Isometric::new(
                number_of_links,
                link_length,
                hinge_mass,
                link_stiffness,
                link_energy,
            ),
        }
    }
}

//! The extensible freely-jointed chain.
//!
//! Each link carries a harmonic stretch energy `k·(l − ℓ)²/2` about its rest
//! length on top of free hinge rotation. The isotensional partition function
//! remains closed-form through the error function, and an asymptotic facet
//! expands it for stiff links, where the model approaches the rigid
//! freely-jointed chain with an `η/κ` extensibility correction.

mod isometric;
mod isotensional;

pub use isometric::{Isometric, IsometricAsymptotic, IsometricAsymptoticReduced, IsometricLegendre};
pub use isotensional::{
    Isotensional, IsotensionalAsymptotic, IsotensionalAsymptoticReduced, IsotensionalLegendre,
};

use crate::error::{check_number_of_links, check_positive, ChainError};

/// The extensible freely-jointed chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Efjc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl Efjc {
    /// Creates an extensible freely-jointed chain, validating all parameters.
    pub fn new(
        number_of_links: u8,
        link_length: f64,
        hinge_mass: f64,
        link_stiffness: f64,
    ) -> Result<Self, ChainError> {
        let number_of_links = check_number_of_links(number_of_links)?;
        let link_length = check_positive("link_length", link_length)?;
        let hinge_mass = check_positive("hinge_mass", hinge_mass)?;
        let link_stiffness = check_positive("link_stiffness", link_stiffness)?;
        Ok(Self {
            number_of_links,
            link_length,
            hinge_mass,
            link_stiffness,
            thermodynamics: Thermodynamics::new(number_of_links, link_length, hinge_mass, link_stiffness),
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

    /// The harmonic link stiffness in J/(mol·nm²).
    pub fn link_stiffness(&self) -> f64 {
        self.link_stiffness
    }
}

/// Ensemble facets of the extensible freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
}

impl Thermodynamics {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64, link_stiffness: f64) -> Self {
        Self {
            isotensional: Isotensional::new(number_of_links, link_length, hinge_mass, link_stiffness),
            isometric: Isometric::new(number_of_links, link_length, hinge_mass, link_stiffness),
        }
    }
}

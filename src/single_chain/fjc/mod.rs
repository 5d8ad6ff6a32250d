//! The freely-jointed chain of rigid links.
//!
//! The isotensional ensemble is fully closed-form (Langevin force–extension
//! law), the isometric ensemble is exact through the Treloar alternating sum
//! for the end-to-end configurational density, and the modified-canonical
//! ensemble couples the chain to an external harmonic restraint, recovering
//! the other two ensembles in its strong- and weak-potential limits.

mod isometric;
mod isotensional;
mod modified_canonical;

pub use isometric::{Isometric, IsometricLegendre};
pub use isotensional::{Isotensional, IsotensionalLegendre};
pub use modified_canonical::{
    ModifiedCanonical, ModifiedCanonicalAsymptotic, StrongPotential, WeakPotential,
};

use crate::error::{check_number_of_links, check_positive, ChainError};

/// The freely-jointed chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Fjc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl Fjc {
    /// Creates a freely-jointed chain, validating all parameters.
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

/// Ensemble facets of the freely-jointed chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermodynamics {
    /// The fixed-force ensemble.
    pub isotensional: Isotensional,
    /// The fixed-length ensemble.
    pub isometric: Isometric,
    /// The harmonically restrained ensemble.
    pub modified_canonical: ModifiedCanonical,
}

impl Thermodynamics {
    fn new(number_of_links: u8, link_length: f64, hinge_mass: f64) -> Self {
        Self {
            isotensional: Isotensional::new(number_of_links, link_length, hinge_mass),
            isometric: Isometric::new(number_of_links, link_length, hinge_mass),
            modified_canonical: ModifiedCanonical::new(number_of_links, link_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_echoes_parameters() {
        let model = Fjc::new(25, 1.5, 0.5).unwrap();
        assert_eq!(model.number_of_links(), 25);
        assert_eq!(model.link_length(), 1.5);
        assert_eq!(model.hinge_mass(), 0.5);
    }

    #[test]
    fn test_constructor_rejects_bad_parameters() {
        assert!(Fjc::new(0, 1.0, 1.0).is_err());
        assert!(Fjc::new(8, -1.0, 1.0).is_err());
        assert!(Fjc::new(8, 1.0, f64::NAN).is_err());
    }
}

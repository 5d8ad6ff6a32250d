//! The freely-jointed chain with Lennard-Jones link potentials.
//!
//! Each link stretches in a Lennard-Jones well normalized so that its
//! curvature at the rest length equals the link stiffness,
//! `u(λ) = (κ/72)·(λ⁻¹² − 2λ⁻⁶ + 1)` in units of `kB·T` with `λ = l/ℓ` the
//! link stretch. The restoring force peaks at the inflection stretch
//! `λ_max = (13/7)^(1/6)`, which bounds the force domain of every facet. The
//! exact isotensional quantities come from midpoint quadrature of the
//! single-link partition integral; the asymptotic facets expand it about the
//! mechanical stretch for stiff links.

mod isometric;
mod isotensional;
mod link_potential;

pub use isometric::{Isometric, IsometricAsymptotic, IsometricAsymptoticReduced, IsometricLegendre};
pub use isotensional::{
    Isotensional, IsotensionalAsymptotic, IsotensionalAsymptoticReduced, IsotensionalLegendre,
};

use crate::error::{check_number_of_links, check_positive, ChainError};

/// The Lennard-Jones freely-jointed chain model.
#[derive(Debug, Clone, PartialEq)]
pub struct LennardJonesFjc {
    number_of_links: u8,
    link_length: f64,
    hinge_mass: f64,
    link_stiffness: f64,
    /// Ensemble facets of the model.
    pub thermodynamics: Thermodynamics,
}

impl LennardJonesFjc {
    /// Creates a Lennard-Jones freely-jointed chain, validating all parameters.
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

    /// The rest-length curvature of the link potential in J/(mol·nm²).
    pub fn link_stiffness(&self) -> f64 {
        self.link_stiffness
    }
}

/// Ensemble facets of the Lennard-Jones freely-jointed chain.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_echoes_parameters() {
        let model = LennardJonesFjc::new(8, 1.0, 1.0, 1.25e6).unwrap();
        assert_eq!(model.number_of_links(), 8);
        assert_eq!(model.link_length(), 1.0);
        assert_eq!(model.hinge_mass(), 1.0);
        assert_eq!(model.link_stiffness(), 1.25e6);
    }

    #[test]
    fn test_constructor_rejects_bad_parameters() {
        assert!(LennardJonesFjc::new(0, 1.0, 1.0, 1.0).is_err());
        assert!(LennardJonesFjc::new(8, 0.0, 1.0, 1.0).is_err());
        assert!(LennardJonesFjc::new(8, 1.0, 1.0, f64::NAN).is_err());
    }
}

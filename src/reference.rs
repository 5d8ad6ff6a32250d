//! This module provides reference parameter sets and utilities for loading them from TOML.
//!
//! It defines the `ModelReference` struct holding the baseline parameters of one
//! chain model, and the `ReferenceParameters` struct collecting one entry per
//! model family. The embedded defaults (see [`crate::get_default_reference`])
//! are the values around which the test suite draws randomized chains; user
//! code can load its own document with [`ReferenceParameters::load_from_str`].

use crate::error::ChainError;
use serde::Deserialize;

/// Baseline parameters of a single chain model.
///
/// The three universal parameters are always present; the model-specific ones
/// (`link_stiffness`, `well_width`, `persistence_length`, `link_energy`) are
/// optional fields populated only for the families that carry them.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ModelReference {
    /// The baseline number of links in the chain.
    pub number_of_links: u8,
    /// The baseline link length in nm.
    pub link_length: f64,
    /// The baseline hinge mass in kg/mol.
    pub hinge_mass: f64,
    /// The baseline link stiffness in J/(mol·nm²), for extensible-link models.
    #[serde(default)]
    pub link_stiffness: Option<f64>,
    /// The baseline square-well width in nm, for the square-well chain.
    #[serde(default)]
    pub well_width: Option<f64>,
    /// The baseline persistence length in nm, for the worm-like chain.
    #[serde(default)]
    pub persistence_length: Option<f64>,
    /// The baseline link dissociation energy in J/mol, for the Morse chain.
    #[serde(default)]
    pub link_energy: Option<f64>,
}

/// A collection of reference parameters, one entry per chain model family.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ReferenceParameters {
    /// Baseline parameters for the ideal (Gaussian) chain.
    pub ideal: ModelReference,
    /// Baseline parameters for the freely-jointed chain.
    pub fjc: ModelReference,
    /// Baseline parameters for the extensible freely-jointed chain.
    pub efjc: ModelReference,
    /// Baseline parameters for the square-well freely-jointed chain.
    pub swfjc: ModelReference,
    /// Baseline parameters for the Lennard-Jones-link chain.
    pub lennard_jones_fjc: ModelReference,
    /// Baseline parameters for the Morse-link chain.
    pub morse_fjc: ModelReference,
    /// Baseline parameters for the worm-like chain.
    pub wlc: ModelReference,
}

impl ReferenceParameters {
    /// Parses a reference document from a TOML string.
    pub fn load_from_str(content: &str) -> Result<Self, ChainError> {
        Ok(toml::from_str(content)?)
    }

    /// Looks up a model entry by its family name.
    ///
    /// The recognized names are the field names of this struct. Unknown names
    /// produce [`ChainError::ReferenceNotFound`].
    pub fn get(&self, model: &str) -> Result<&ModelReference, ChainError> {
        match model {
            "ideal" => Ok(&self.ideal),
            "fjc" => Ok(&self.fjc),
            "efjc" => Ok(&self.efjc),
            "swfjc" => Ok(&self.swfjc),
            "lennard_jones_fjc" => Ok(&self.lennard_jones_fjc),
            "morse_fjc" => Ok(&self.morse_fjc),
            "wlc" => Ok(&self.wlc),
            other => Err(ChainError::ReferenceNotFound(other.to_string())),
        }
    }
}

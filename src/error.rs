use thiserror::Error;

/// The primary error type for all fallible operations in the `chainmech` library.
///
/// Model constructors validate their parameters eagerly, so every variant here
/// describes either a rejected construction input or a problem with the
/// embedded reference-parameter document. Evaluation methods themselves are
/// pure functions of well-formed inputs and have no error path; feeding them
/// arguments outside the documented validity domain propagates IEEE NaN.
#[derive(Error, Debug)]
pub enum ChainError {
    /// A real-valued model parameter failed validation.
    ///
    /// Every dimensional parameter of a chain model (link length, hinge mass,
    /// link stiffness, well width, persistence length, link energy) must be a
    /// finite, strictly positive real number.
    #[error("invalid parameter `{name}`: {value} (must be finite and strictly positive)")]
    InvalidParameter {
        /// The name of the offending constructor argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The requested number of links is below the model's minimum.
    ///
    /// Two links are the least that give the end-to-end statistics a
    /// nondegenerate configurational density.
    #[error("number of links must be at least {minimum}, got {value}")]
    TooFewLinks {
        /// The rejected link count.
        value: u8,
        /// The smallest admissible link count.
        minimum: u8,
    },

    /// The reference-parameter document does not contain an entry for the
    /// requested model.
    #[error("reference parameters not found for model `{0}`")]
    ReferenceNotFound(String),

    /// An error that occurred while parsing a reference-parameter document,
    /// typically indicating invalid TOML or a structural mismatch with the
    /// expected `ReferenceParameters` format.
    #[error("failed to deserialize TOML reference parameters: {0}")]
    DeserializationError(#[from] toml::de::Error),
}

/// Validates that a dimensional model parameter is finite and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, ChainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChainError::InvalidParameter { name, value })
    }
}

/// Minimum admissible number of links for every chain model.
pub(crate) const MINIMUM_NUMBER_OF_LINKS: u8 = 2;

/// Validates the link count shared by every chain model.
pub(crate) fn check_number_of_links(value: u8) -> Result<u8, ChainError> {
    if value >= MINIMUM_NUMBER_OF_LINKS {
        Ok(value)
    } else {
        Err(ChainError::TooFewLinks {
            value,
            minimum: MINIMUM_NUMBER_OF_LINKS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive_accepts_positive_reals() {
        assert!(check_positive("link_length", 1.0).is_ok());
        assert!(check_positive("link_length", 1e-12).is_ok());
    }

    #[test]
    fn test_check_positive_rejects_nonpositive_and_nonfinite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = check_positive("hinge_mass", bad).unwrap_err();
            match err {
                ChainError::InvalidParameter { name, .. } => assert_eq!(name, "hinge_mass"),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_check_number_of_links_boundary() {
        assert!(check_number_of_links(2).is_ok());
        assert!(check_number_of_links(1).is_err());
        assert!(check_number_of_links(0).is_err());
    }
}

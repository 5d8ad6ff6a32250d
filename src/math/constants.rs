//! This module defines fundamental physical constants used throughout the chainmech library.
//!
//! The library works in a molar unit system (energies in J/mol, lengths in nm,
//! masses in kg/mol, time in ns) so that thermal energies at room temperature
//! are order-of-thousands numbers and nondimensional groups stay well scaled.

/// The Boltzmann constant in units of J/(mol·K).
///
/// In the molar unit system this is numerically the gas constant. It sets the
/// thermal energy scale `kB·T` used to nondimensionalize every free energy and
/// force in the library: the nondimensional force is `f·ℓ/(kB·T)` and every
/// nondimensional energy is the dimensional one divided by `kB·T`.
pub const BOLTZMANN_CONSTANT: f64 = 8.314462618;

/// The Planck constant in units of J·ns/mol.
///
/// It enters only through the semiclassical rotational partition factor of a
/// hinged link, `8π²·m·ℓ²·kB·T/h²`, which fixes the temperature-dependent
/// reference of the absolute free energies. Relative free energies are
/// independent of this constant.
pub const PLANCK_CONSTANT: f64 = 0.06350779923502592;

/// Computes the rotational partition factor of a single hinged link.
///
/// The factor is `8π²·I·kB·T/h²` with moment of inertia `I = m·ℓ²`, where `m`
/// is the hinge mass and `ℓ` the link length. It appears in the absolute
/// (but not relative) free energies of the freely-jointed chain family, and as
/// the additive `kB·T·ln(...)` correction in their Legendre relations.
pub fn rotational_partition_factor(hinge_mass: f64, link_length: f64, temperature: f64) -> f64 {
    8.0 * std::f64::consts::PI.powi(2) * hinge_mass * link_length.powi(2) * BOLTZMANN_CONSTANT
        * temperature
        / PLANCK_CONSTANT.powi(2)
}

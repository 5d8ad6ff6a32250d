//! This module contains one submodule per single-chain model family.
//!
//! Every model follows the same shape: a parameter-carrying struct whose
//! constructor validates its arguments, accessor methods echoing the stored
//! parameters unchanged, and a public `thermodynamics` field composing the
//! ensemble facets. Facets are stateless value types; every method is a pure
//! function of its arguments and the owning model's parameters.
//!
//! # Conventions
//!
//! With `N` links of length `ℓ`, hinge mass `m`, thermal energy `kB·T`:
//!
//! - nondimensional force: `η = f·ℓ/(kB·T)`;
//! - nondimensional end-to-end length per link: `γ = x/(N·ℓ)`;
//! - nondimensional energies are dimensional ones divided by `kB·T`;
//! - `_per_link` quantities are totals divided by `N`;
//! - `relative_` quantities subtract the zero-force (or zero-extension)
//!   reference at the same temperature;
//! - absolute free energies carry the semiclassical rotational factor
//!   `Λ(T) = 8π²·m·ℓ²·kB·T/h²` per hinge, and a Gaussian stretch-fluctuation
//!   factor per extensible link where one exists.

/// The extensible freely-jointed chain (harmonic links).
pub mod efjc;

/// The freely-jointed chain of rigid links.
pub mod fjc;

/// The ideal (Gaussian) chain.
pub mod ideal;

/// The freely-jointed chain with Lennard-Jones link potentials.
pub mod lennard_jones_fjc;

/// The freely-jointed chain with Morse link potentials.
pub mod morse_fjc;

/// The freely-jointed chain with square-well link potentials.
pub mod swfjc;

/// The worm-like chain.
pub mod wlc;

//! This module provides the mathematical infrastructure shared by every chain model.
//!
//! It contains the physical constants of the molar unit system, the midpoint
//! quadrature rule and the residual functionals built on it, the special
//! functions of single-chain statistics, and a guarded root finder for the
//! monotone inversions between force and extension representations.

/// Physical constants and the rotational partition factor.
pub mod constants;

/// Midpoint quadrature, RMS relative error, and log-log slopes.
pub mod quadrature;

/// Guarded Newton/bisection inversion of strictly monotone maps.
pub mod rootfind;

/// Langevin function family and log-binomial coefficients.
pub mod special;

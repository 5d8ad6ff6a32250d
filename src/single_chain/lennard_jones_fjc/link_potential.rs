//! The Lennard-Jones link potential and its mechanical inverse.
//!
//! The potential is normalized so the curvature at the rest stretch `λ = 1`
//! equals the nondimensional link stiffness `κ`, which keeps the stiff-link
//! expansion uniform across the anharmonic chain models.

use crate::math::rootfind::invert_monotone;

/// Inflection stretch of the potential, where the link force peaks.
pub(super) fn stretch_max() -> f64 {
    (13.0 / 7.0_f64).powf(1.0 / 6.0)
}

/// Peak nondimensional link force, `u'(λ_max)`.
pub(super) fn force_max(kappa: f64) -> f64 {
    potential_derivative(stretch_max(), kappa)
}

/// Link potential `u(λ) = (κ/72)·(λ⁻¹² − 2λ⁻⁶ + 1)` in units of `kB·T`.
pub(super) fn potential(stretch: f64, kappa: f64) -> f64 {
    kappa / 72.0 * (stretch.powi(-12) - 2.0 * stretch.powi(-6) + 1.0)
}

/// Link force `u'(λ) = (κ/6)·(λ⁻⁷ − λ⁻¹³)`.
pub(super) fn potential_derivative(stretch: f64, kappa: f64) -> f64 {
    kappa / 6.0 * (stretch.powi(-7) - stretch.powi(-13))
}

/// Potential curvature `u″(λ) = (κ/6)·(13λ⁻¹⁴ − 7λ⁻⁸)`.
pub(super) fn potential_curvature(stretch: f64, kappa: f64) -> f64 {
    kappa / 6.0 * (13.0 * stretch.powi(-14) - 7.0 * stretch.powi(-8))
}

/// Third potential derivative `u‴(λ) = (κ/6)·(56λ⁻⁹ − 182λ⁻¹⁵)`.
pub(super) fn potential_third_derivative(stretch: f64, kappa: f64) -> f64 {
    kappa / 6.0 * (56.0 * stretch.powi(-9) - 182.0 * stretch.powi(-15))
}

/// Mechanical stretch `λ(η)` solving `u'(λ) = η` on the stable branch `[1, λ_max]`.
pub(super) fn mechanical_stretch(eta: f64, kappa: f64) -> f64 {
    invert_monotone(
        |stretch| potential_derivative(stretch, kappa),
        |stretch| potential_curvature(stretch, kappa),
        eta,
        1.0,
        stretch_max(),
    )
}

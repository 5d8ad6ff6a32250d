//! The Morse link potential and its closed-form mechanical inverse.
//!
//! With `m = e^(−a(λ−1))` the link force is `u'(λ) = 2·u_b·a·m(1 − m)`, a
//! quadratic in `m`, so the stable-branch inverse is algebraic: no root
//! finding is needed to recover the stretch from the force.

/// Inverse width of the Morse well, `a = √(κ/(2u_b))`.
pub(super) fn well_inverse_width(kappa: f64, energy: f64) -> f64 {
    (kappa / (2.0 * energy)).sqrt()
}

/// Inflection stretch of the potential, `λ_max = 1 + ln 2/a`.
pub(super) fn stretch_max(kappa: f64, energy: f64) -> f64 {
    1.0 + std::f64::consts::LN_2 / well_inverse_width(kappa, energy)
}

/// Peak nondimensional link force, `η_max = u_b·a/2`.
pub(super) fn force_max(kappa: f64, energy: f64) -> f64 {
    energy * well_inverse_width(kappa, energy) / 2.0
}

/// Link potential `u(λ) = u_b·(1 − e^(−a(λ−1)))²` in units of `kB·T`.
pub(super) fn potential(stretch: f64, kappa: f64, energy: f64) -> f64 {
    let m = (-well_inverse_width(kappa, energy) * (stretch - 1.0)).exp();
    energy * (1.0 - m).powi(2)
}

/// Link force `u'(λ) = 2·u_b·a·m(1 − m)`, kept as the test reference for
/// the closed-form inverse.
#[cfg(test)]
fn potential_derivative(stretch: f64, kappa: f64, energy: f64) -> f64 {
    let a = well_inverse_width(kappa, energy);
    let m = (-a * (stretch - 1.0)).exp();
    2.0 * energy * a * m * (1.0 - m)
}

/// Potential curvature `u″(λ) = 2·u_b·a²·m(2m − 1)`.
pub(super) fn potential_curvature(stretch: f64, kappa: f64, energy: f64) -> f64 {
    let a = well_inverse_width(kappa, energy);
    let m = (-a * (stretch - 1.0)).exp();
    2.0 * energy * a.powi(2) * m * (2.0 * m - 1.0)
}

/// Third potential derivative `u‴(λ) = −2·u_b·a³·m(4m − 1)`.
pub(super) fn potential_third_derivative(stretch: f64, kappa: f64, energy: f64) -> f64 {
    let a = well_inverse_width(kappa, energy);
    let m = (-a * (stretch - 1.0)).exp();
    -2.0 * energy * a.powi(3) * m * (4.0 * m - 1.0)
}

/// Mechanical stretch `λ(η)` on the stable branch, in closed form.
///
/// Solving `2·u_b·a·m(1 − m) = η` for the root with `m ≥ 1/2` gives
/// `m = (1 + √(1 − η/η_max))/2`; the stretch follows as `1 − ln(m)/a`.
pub(super) fn mechanical_stretch(eta: f64, kappa: f64, energy: f64) -> f64 {
    let a = well_inverse_width(kappa, energy);
    let m = 0.5 * (1.0 + (1.0 - 2.0 * eta / (energy * a)).sqrt());
    1.0 - m.ln() / a
}

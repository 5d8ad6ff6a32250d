//! Special functions of single-chain statistical mechanics.
//!
//! The Langevin function is the force–extension law of a rigid freely-rotating
//! link; its inverse is the Legendre-dual force law of the isometric view. The
//! log-binomial helper keeps the alternating Treloar sums of the freely-jointed
//! chain in log space.

use libm::lgamma;

/// Threshold below which the Langevin function switches to its Maclaurin series.
const LANGEVIN_SERIES_BOUND: f64 = 1e-3;

/// The Langevin function `L(η) = coth(η) − 1/η`.
///
/// For small arguments the direct expression loses all significant digits to
/// cancellation, so below [`LANGEVIN_SERIES_BOUND`] the Maclaurin series
/// `η/3 − η³/45 + 2η⁵/945` is used instead.
pub fn langevin(x: f64) -> f64 {
    if x.abs() < LANGEVIN_SERIES_BOUND {
        x / 3.0 - x.powi(3) / 45.0 + 2.0 * x.powi(5) / 945.0
    } else {
        1.0 / x.tanh() - 1.0 / x
    }
}

/// Derivative of the Langevin function, `L'(η) = 1/η² − 1/sinh²(η)`.
pub fn langevin_derivative(x: f64) -> f64 {
    if x.abs() < LANGEVIN_SERIES_BOUND {
        1.0 / 3.0 - x.powi(2) / 15.0 + 2.0 * x.powi(4) / 189.0
    } else {
        1.0 / x.powi(2) - 1.0 / x.sinh().powi(2)
    }
}

/// The inverse Langevin function on `(−1, 1)`.
///
/// Seeded with the Cohen rational approximant `γ(3 − γ²)/(1 − γ²)` and
/// polished with Newton iterations on `L(η) − γ`; a handful of steps reach
/// machine precision anywhere away from the `|γ| → 1` singularity.
pub fn inverse_langevin(y: f64) -> f64 {
    let mut x = y * (3.0 - y.powi(2)) / (1.0 - y.powi(2));
    for _ in 0..8 {
        let residual = langevin(x) - y;
        if residual.abs() < 1e-15 {
            break;
        }
        x -= residual / langevin_derivative(x);
    }
    x
}

/// Second derivative of the Langevin function, `L″(η) = −2/η³ + 2cosh(η)/sinh³(η)`.
pub fn langevin_second_derivative(x: f64) -> f64 {
    if x.abs() < LANGEVIN_SERIES_BOUND {
        -2.0 * x / 15.0 + 8.0 * x.powi(3) / 189.0
    } else {
        -2.0 / x.powi(3) + 2.0 * x.cosh() / x.sinh().powi(3)
    }
}

/// Logarithm of the hyperbolic sinc, `ln(sinh(η)/η)`.
///
/// This is the per-link relative Gibbs free energy of a rigid link (negated).
/// A Maclaurin series covers the cancellation-prone small-`η` range and an
/// exponential asymptote covers the range where `sinh` would overflow.
pub fn ln_sinhc(x: f64) -> f64 {
    let x = x.abs();
    if x < LANGEVIN_SERIES_BOUND {
        x.powi(2) / 6.0 - x.powi(4) / 180.0
    } else if x > 30.0 {
        // sinh(η) = e^η/2 to relative accuracy e^(−2η).
        x - std::f64::consts::LN_2 - x.ln()
    } else {
        (x.sinh() / x).ln()
    }
}

/// Natural logarithm of the binomial coefficient `C(n, k)`.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    lgamma((n + 1) as f64) - lgamma((k + 1) as f64) - lgamma((n - k + 1) as f64)
}

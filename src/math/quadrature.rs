//! Midpoint-rule quadrature and the error functionals built on it.
//!
//! The library needs only a deterministic fixed-grid rule: the restrained
//! partition integrals of the modified-canonical ensemble, the anharmonic-link
//! partition integrals, and the RMS deviation functionals used to quantify how
//! fast an asymptotic approximation approaches an exact result.

/// Integrates `f` over `[lower, upper]` with the midpoint rule on `n` equal cells.
///
/// The integrand is evaluated once per cell, at the cell midpoint, and the
/// samples are summed times the cell width. The rule is deterministic, has no
/// side effects, and is second-order accurate for smooth integrands.
pub fn integrate<F>(f: F, lower: f64, upper: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let width = (upper - lower) / n as f64;
    (0..n)
        .map(|i| f(lower + (i as f64 + 0.5) * width))
        .sum::<f64>()
        * width
}

/// Root-mean-square relative deviation of `f` from the reference `g` over `[lower, upper]`.
///
/// Computed as `sqrt(∫(f−g)² / ∫g²)` with both integrals on the same midpoint
/// grid of `n` cells. This is the residual measure behind every
/// convergence-order check in the test suite.
pub fn rms_relative_error<F, G>(f: F, g: G, lower: f64, upper: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    let numerator = integrate(|x| (f(x) - g(x)).powi(2), lower, upper, n);
    let denominator = integrate(|x| g(x).powi(2), lower, upper, n);
    (numerator / denominator).sqrt()
}

/// Two-point log-log slope between the samples `(x0, y0)` and `(x1, y1)`.
///
/// When `y` is a residual and `x` a stiffness-like parameter, the slope is the
/// apparent convergence order of the approximation being probed.
pub fn log_log_slope(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (y1 / y0).ln() / (x1 / x0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_polynomials() {
        // Midpoint rule is exact for linear integrands.
        assert_relative_eq!(integrate(|x| 2.0 * x + 1.0, 0.0, 1.0, 7), 2.0, epsilon = 1e-13);
        // Quadratic over [0, 1]: converges at second order.
        assert_relative_eq!(
            integrate(|x| x * x, 0.0, 1.0, 10_000),
            1.0 / 3.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_integrate_respects_bounds() {
        assert_relative_eq!(
            integrate(|x| x.cos(), 0.0, std::f64::consts::FRAC_PI_2, 5_000),
            1.0,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_rms_relative_error_identity_and_scale() {
        let err = rms_relative_error(|x| x, |x| x, 1.0, 2.0, 100);
        assert!(err.abs() < 1e-14);
        // f = (1 + c)·g gives a relative error of exactly |c|.
        let err = rms_relative_error(|x| 1.01 * x.exp(), |x| x.exp(), 0.0, 1.0, 100);
        assert_relative_eq!(err, 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_log_log_slope_recovers_power_law() {
        let y = |x: f64| 3.0 * x.powf(-1.5);
        assert_relative_eq!(
            log_log_slope(10.0, y(10.0), 12.0, y(12.0)),
            -1.5,
            epsilon = 1e-12
        );
    }
}

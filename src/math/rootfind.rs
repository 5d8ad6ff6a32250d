//! Guarded one-dimensional root finding for monotone inversions.
//!
//! Several facets invert a strictly monotone map (Marko–Siggia force law,
//! mechanical stretch of an anharmonic link, asymptotic force–extension
//! relations). On a valid bracket the Newton iteration below cannot escape or
//! stall: any step that leaves the bracket, or fails to shrink the residual,
//! is replaced by a bisection step, so the routine always converges and the
//! evaluation methods built on it stay infallible.

/// Relative tolerance at which the iteration stops.
const TOLERANCE: f64 = 1e-13;

/// Iteration cap; bisection alone would reach `TOLERANCE` well within this.
const MAX_ITERATIONS: u32 = 200;

/// Solves `f(x) = target` for `x` in `[lower, upper]`.
///
/// `f` must be continuous and strictly increasing on the bracket, with
/// `f(lower) ≤ target ≤ f(upper)`; `derivative` is its slope, used for the
/// Newton steps. Returns the unique root to near machine precision.
pub fn invert_monotone<F, D>(f: F, derivative: D, target: f64, lower: f64, upper: f64) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut a = lower;
    let mut b = upper;
    let mut x = 0.5 * (a + b);
    for _ in 0..MAX_ITERATIONS {
        let residual = f(x) - target;
        if !residual.is_finite() {
            // An increasing map only overflows at the high end of the
            // bracket, so a non-finite residual shrinks it from above.
            b = x;
            x = 0.5 * (a + b);
            continue;
        }
        if residual.abs() <= TOLERANCE * (target.abs() + 1.0) {
            return x;
        }
        if residual > 0.0 {
            b = x;
        } else {
            a = x;
        }
        let slope = derivative(x);
        let newton = x - residual / slope;
        x = if slope.is_finite() && slope > 0.0 && newton > a && newton < b {
            newton
        } else {
            0.5 * (a + b)
        };
        if b - a <= f64::EPSILON * (b.abs() + 1.0) {
            return x;
        }
    }
    x
}

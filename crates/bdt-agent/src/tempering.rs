//! Perceptual tempering.
//!
//! `p^α / (p^α + (1 − p)^α)` with inverse temperature `α`:
//! `α > 1` sharpens toward 0/1, `α < 1` flattens toward 0.5,
//! `α = 1` is the identity.

/// Temper a success probability.
///
/// `p <= 0` maps to exactly 0 and `p >= 1` to exactly 1, which keeps
/// `0^α` and the `0/0` case out of the formula.
pub fn temper(p: f64, alpha: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    // p + (1 − p) is not always exactly 1.0 in floating point.
    if alpha == 1.0 {
        return p;
    }
    let num = p.powf(alpha);
    let den = num + (1.0 - p).powf(alpha);
    num / den
}

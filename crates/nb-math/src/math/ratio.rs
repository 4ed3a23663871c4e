//! Additively smoothed ratio estimators for binary outcomes.
//!
//! A binary feature within a class is modeled as a Bernoulli variable. Its
//! presence probability is estimated from a presence count `k` out of `n`
//! group members as:
//!
//! `p = (k + s) / (n + 2s)`
//!
//! Where `s ≥ 0` is the additive (Laplace) smoothing constant. The `2s` in
//! the denominator distributes the pseudo-counts over both outcomes
//! (present/absent), so `p` lies strictly inside (0, 1) whenever `s > 0`.
//! With `s = 0` this reduces to the maximum-likelihood estimate and may
//! reach exactly 0 or 1.

/// Smoothed Bernoulli presence probability: `(count + s) / (total + 2s)`.
///
/// # Arguments
/// * `count` - Number of group members with the feature present
/// * `total` - Group size (must be positive)
/// * `smoothing` - Additive smoothing constant, `s ≥ 0`
///
/// # Returns
/// The smoothed estimate, or NAN for invalid inputs (negative or NaN
/// arguments, `total <= 0`, or `count > total`).
pub fn smoothed_bernoulli(count: f64, total: f64, smoothing: f64) -> f64 {
    if count.is_nan() || total.is_nan() || smoothing.is_nan() {
        return f64::NAN;
    }
    if count < 0.0 || total <= 0.0 || count > total || smoothing < 0.0 {
        return f64::NAN;
    }
    (count + smoothing) / (total + 2.0 * smoothing)
}

/// Complement of [`smoothed_bernoulli`]: the smoothed absence probability.
///
/// Equals `(total - count + s) / (total + 2s)`, so presence and absence
/// estimates sum to exactly 1 in exact arithmetic.
pub fn smoothed_bernoulli_absent(count: f64, total: f64, smoothing: f64) -> f64 {
    if count.is_nan() || total.is_nan() || smoothing.is_nan() {
        return f64::NAN;
    }
    if count < 0.0 || total <= 0.0 || count > total || smoothing < 0.0 {
        return f64::NAN;
    }
    (total - count + smoothing) / (total + 2.0 * smoothing)
}

//! Probability-domain normalization of counts and raw posterior scores.
//!
//! These helpers turn non-negative weights into probability distributions.
//! They are intended to be used by nb-core estimation and inference so that
//! normalization and the overflow-saturation policy are centralized.

/// Normalize non-negative counts into a probability distribution.
///
/// Returns an empty vector for empty input and a NaN vector if any count is
/// NaN, negative, or non-finite, or if the total is zero.
pub fn normalize_counts(counts: &[f64]) -> Vec<f64> {
    if counts.is_empty() {
        return Vec::new();
    }
    if counts.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return vec![f64::NAN; counts.len()];
    }
    let total: f64 = counts.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![f64::NAN; counts.len()];
    }
    counts.iter().map(|c| c / total).collect()
}

/// Normalize raw per-class posterior scores, with an overflow safeguard.
///
/// Scores are un-normalized joint values `prior * Π likelihood-terms` and
/// are expected to be non-negative. Three regimes:
///
/// - Any score is `+inf`: no division is performed. Each of the `k`
///   overflowing entries becomes exactly `1/k`; the remaining entries keep
///   their raw scores. This trades a degenerate one-hot-like output for the
///   NaN that an inf-involved division would produce.
/// - All scores are zero (reachable only with unsmoothed estimates): the
///   raw zeros are returned unchanged.
/// - Otherwise every score is divided by the finite positive sum.
///
/// The boolean is true when the overflow branch was taken. NaN inputs
/// propagate to a NaN vector.
pub fn normalize_scores(scores: &[f64]) -> (Vec<f64>, bool) {
    if scores.is_empty() {
        return (Vec::new(), false);
    }
    if scores.iter().any(|s| s.is_nan()) {
        return (vec![f64::NAN; scores.len()], false);
    }

    let overflowed = scores.iter().filter(|s| **s == f64::INFINITY).count();
    if overflowed > 0 {
        let share = 1.0 / overflowed as f64;
        let probs = scores
            .iter()
            .map(|s| if *s == f64::INFINITY { share } else { *s })
            .collect();
        return (probs, true);
    }

    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return (scores.to_vec(), false);
    }
    (scores.iter().map(|s| s / total).collect(), false)
}

//! Posterior computation: Bayes' rule over independent Bernoulli terms.
//!
//! For a test sample `x` and class `c`, the raw joint score is
//!
//! `score[c] = prior[c] * Π_j  lik[c][j]       if x_j present
//!                             1 - lik[c][j]   otherwise`
//!
//! accumulated left-to-right over feature indices, then normalized into a
//! probability distribution. Samples are processed independently; repeated
//! calls with identical inputs are bit-identical.

use tracing::warn;

use nb_math::normalize_scores;

use crate::error::{Error, Result};
use crate::likelihood::Likelihood;
use crate::prior::Prior;

/// Compute the normalized posterior distribution for each test sample.
///
/// Returns one probability vector per sample, indexed by class ordinal.
/// Each row sums to 1 within tolerance unless the overflow safeguard fires:
/// when a raw score reaches `+inf` (reachable only through degenerate
/// caller-supplied tables), every overflowing class receives `1/k` for `k`
/// simultaneous overflows and the remaining classes keep their raw scores.
/// A row of all-zero scores (possible with unsmoothed estimates) is
/// returned as-is.
///
/// # Errors
/// [`Error::ClassCountMismatch`] when prior and likelihood disagree;
/// [`Error::FeatureLengthMismatch`] when a sample's width differs from the
/// trained feature width.
pub fn compute(batch: &[Vec<u8>], prior: &Prior, likelihood: &Likelihood) -> Result<Vec<Vec<f64>>> {
    if prior.n_classes() != likelihood.n_classes() {
        return Err(Error::ClassCountMismatch {
            prior: prior.n_classes(),
            likelihood: likelihood.n_classes(),
        });
    }

    let n_features = likelihood.n_features();
    let mut posteriors = Vec::with_capacity(batch.len());

    for (row, sample) in batch.iter().enumerate() {
        if sample.len() != n_features {
            return Err(Error::FeatureLengthMismatch {
                row,
                expected: n_features,
                got: sample.len(),
            });
        }

        let scores: Vec<f64> = prior
            .probs()
            .iter()
            .enumerate()
            .map(|(c, &p)| {
                let lik = likelihood.class_row(c);
                let mut score = p;
                for (j, &x) in sample.iter().enumerate() {
                    score *= if x != 0 { lik[j] } else { 1.0 - lik[j] };
                }
                score
            })
            .collect();

        let (probs, saturated) = normalize_scores(&scores);
        if saturated {
            warn!(row, "posterior scores overflowed; saturating to one-hot");
        }
        posteriors.push(probs);
    }

    Ok(posteriors)
}

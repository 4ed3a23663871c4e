//! Class prior estimation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grouping::Grouping;

/// Probability of each class before observing any features, indexed by
/// class ordinal. Sums to 1 within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prior {
    probs: Vec<f64>,
}

impl Prior {
    /// Estimate the prior from relative group sizes: `|G_c| / N`.
    ///
    /// Only classes present in the grouping get an entry; a single-label
    /// training set yields the one-entry distribution `[1.0]`.
    pub fn from_grouping<L: Eq>(grouping: &Grouping<L>) -> Self {
        let counts: Vec<f64> = (0..grouping.n_classes())
            .map(|c| grouping.group(c).len() as f64)
            .collect();
        Self {
            probs: nb_math::normalize_counts(&counts),
        }
    }

    /// Uniform prior: `1/k` for each of `k` classes.
    ///
    /// Covers the caller-side "ignore class balance" configuration.
    pub fn uniform(n_classes: usize) -> Result<Self> {
        if n_classes == 0 {
            return Err(Error::EmptyTrainingSet);
        }
        Ok(Self {
            probs: vec![1.0 / n_classes as f64; n_classes],
        })
    }

    /// Caller-supplied prior weights, normalized to sum to 1.
    ///
    /// # Errors
    /// [`Error::EmptyTrainingSet`] for an empty vector;
    /// [`Error::InvalidPrior`] for negative or non-finite weights, or when
    /// all weights are zero.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        for (class, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidPrior { class, value: w });
            }
        }
        let probs = nb_math::normalize_counts(weights);
        if probs.iter().any(|p| p.is_nan()) {
            return Err(Error::InvalidPrior {
                class: 0,
                value: 0.0,
            });
        }
        Ok(Self { probs })
    }

    /// Prior probabilities, indexed by class ordinal.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Number of classes covered.
    pub fn n_classes(&self) -> usize {
        self.probs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn prior_from_ratings_example() {
        let grouping = Grouping::from_labels(&["Y", "N", "Y", "Y"]).unwrap();
        let prior = Prior::from_grouping(&grouping);

        assert!(approx_eq(prior.probs()[0], 0.75, 1e-12)); // Y
        assert!(approx_eq(prior.probs()[1], 0.25, 1e-12)); // N
    }

    #[test]
    fn prior_sums_to_one() {
        let grouping = Grouping::from_labels(&[0, 1, 2, 1, 2, 2, 0]).unwrap();
        let prior = Prior::from_grouping(&grouping);
        let sum: f64 = prior.probs().iter().sum();
        assert!(approx_eq(sum, 1.0, 1e-9));
    }

    #[test]
    fn single_label_prior_is_one() {
        let grouping = Grouping::from_labels(&["only", "only"]).unwrap();
        let prior = Prior::from_grouping(&grouping);
        assert_eq!(prior.probs(), [1.0]);
    }

    #[test]
    fn uniform_prior() {
        let prior = Prior::uniform(4).unwrap();
        assert_eq!(prior.probs(), [0.25; 4]);
        assert_eq!(Prior::uniform(0).unwrap_err(), Error::EmptyTrainingSet);
    }

    #[test]
    fn weights_are_normalized() {
        let prior = Prior::from_weights(&[2.0, 6.0]).unwrap();
        assert!(approx_eq(prior.probs()[0], 0.25, 1e-12));
        assert!(approx_eq(prior.probs()[1], 0.75, 1e-12));
    }

    #[test]
    fn invalid_weights_rejected() {
        assert_eq!(
            Prior::from_weights(&[]).unwrap_err(),
            Error::EmptyTrainingSet
        );
        assert!(matches!(
            Prior::from_weights(&[1.0, -0.5]).unwrap_err(),
            Error::InvalidPrior { class: 1, .. }
        ));
        assert!(matches!(
            Prior::from_weights(&[1.0, f64::INFINITY]).unwrap_err(),
            Error::InvalidPrior { class: 1, .. }
        ));
        assert!(matches!(
            Prior::from_weights(&[0.0, 0.0]).unwrap_err(),
            Error::InvalidPrior { .. }
        ));
    }
}

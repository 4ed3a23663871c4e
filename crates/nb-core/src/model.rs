//! Trained-model value object and the fit/predict surface.

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grouping::{ClassIndex, Grouping};
use crate::likelihood::Likelihood;
use crate::posterior;
use crate::prior::Prior;

/// Caller-supplied training configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Additive (Laplace) smoothing constant, `s ≥ 0`.
    pub smoothing: f64,
    /// Estimate the prior from class frequencies; false uses a uniform
    /// `1/k` prior instead.
    pub fit_prior: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            smoothing: 1.0,
            fit_prior: true,
        }
    }
}

/// An immutable trained Bernoulli naive Bayes model.
///
/// Holds the class index, prior, and likelihood table fixed at fit time.
/// Nothing is mutated after construction, so a model may be shared across
/// threads and reused for arbitrarily many predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BernoulliNb<L> {
    classes: ClassIndex<L>,
    prior: Prior,
    likelihood: Likelihood,
}

impl<L: Eq + Hash + Clone> BernoulliNb<L> {
    /// Train a model from an index-aligned feature matrix and label
    /// sequence.
    ///
    /// # Errors
    /// [`Error::SampleCountMismatch`] when the two sequences disagree in
    /// length; otherwise the grouping and likelihood estimation errors.
    pub fn fit(features: &[Vec<u8>], labels: &[L], options: &FitOptions) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(Error::SampleCountMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }

        let grouping = Grouping::from_labels(labels)?;
        let likelihood = Likelihood::estimate(features, &grouping, options.smoothing)?;
        let prior = if options.fit_prior {
            Prior::from_grouping(&grouping)
        } else {
            Prior::uniform(grouping.n_classes())?
        };

        debug!(
            classes = grouping.n_classes(),
            features = likelihood.n_features(),
            smoothing = options.smoothing,
            fit_prior = options.fit_prior,
            "fitted Bernoulli naive Bayes model"
        );

        Ok(Self {
            classes: grouping.into_class_index(),
            prior,
            likelihood,
        })
    }
}

impl<L: Eq> BernoulliNb<L> {
    /// Posterior class distribution for each sample in the batch, indexed
    /// by class ordinal.
    pub fn predict_proba(&self, batch: &[Vec<u8>]) -> Result<Vec<Vec<f64>>> {
        posterior::compute(batch, &self.prior, &self.likelihood)
    }

    /// Class labels in ordinal order.
    pub fn classes(&self) -> &[L] {
        self.classes.labels()
    }

    /// Feature-vector width F the model was trained on.
    pub fn n_features(&self) -> usize {
        self.likelihood.n_features()
    }

    /// The fitted (or uniform) class prior.
    pub fn prior(&self) -> &Prior {
        &self.prior
    }

    /// The fitted likelihood table.
    pub fn likelihood(&self) -> &Likelihood {
        &self.likelihood
    }
}

impl<L: Eq + Clone> BernoulliNb<L> {
    /// Most probable class label for each sample in the batch.
    ///
    /// Ties break toward the lower ordinal (first-seen class).
    pub fn predict(&self, batch: &[Vec<u8>]) -> Result<Vec<L>> {
        let posteriors = self.predict_proba(batch)?;
        Ok(posteriors
            .iter()
            .map(|row| {
                let mut best = 0;
                for (c, &p) in row.iter().enumerate() {
                    if p > row[best] {
                        best = c;
                    }
                }
                self.classes.labels()[best].clone()
            })
            .collect())
    }
}

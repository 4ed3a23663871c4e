//! Per-class Bernoulli likelihood estimation with additive smoothing.
//!
//! For class `c` and feature `j`, the table stores the smoothed presence
//! probability `P(x_j != 0 | c) = (k_cj + s) / (|G_c| + 2s)`, where `k_cj`
//! counts group members with the feature present. The `2s` denominator
//! spreads the pseudo-counts over both binary outcomes, so every entry is
//! strictly inside (0, 1) whenever `s > 0`; with `s = 0` entries may reach
//! exactly 0 or 1 and can permanently zero a posterior.

use serde::{Deserialize, Serialize};

use nb_math::smoothed_bernoulli;

use crate::error::{Error, Result};
use crate::grouping::Grouping;

/// Smoothed per-class feature presence probabilities, `[class][feature]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Likelihood {
    table: Vec<Vec<f64>>,
    n_features: usize,
}

impl Likelihood {
    /// Estimate the likelihood table from a binary feature matrix.
    ///
    /// A feature is counted as present when its entry is non-zero. The
    /// grouping must have been derived from the same training set, so
    /// `features.len()` must equal the grouping's sample count.
    ///
    /// # Errors
    /// [`Error::InvalidSmoothing`] for negative or non-finite smoothing;
    /// [`Error::SampleCountMismatch`] when the matrix and grouping disagree
    /// on sample count; [`Error::RaggedFeatureMatrix`] when rows differ in
    /// length.
    pub fn estimate<L: Eq>(
        features: &[Vec<u8>],
        grouping: &Grouping<L>,
        smoothing: f64,
    ) -> Result<Self> {
        if !smoothing.is_finite() || smoothing < 0.0 {
            return Err(Error::InvalidSmoothing(smoothing));
        }
        if features.len() != grouping.n_samples() {
            return Err(Error::SampleCountMismatch {
                features: features.len(),
                labels: grouping.n_samples(),
            });
        }

        let n_features = features[0].len();
        for (row, sample) in features.iter().enumerate() {
            if sample.len() != n_features {
                return Err(Error::RaggedFeatureMatrix {
                    row,
                    expected: n_features,
                    got: sample.len(),
                });
            }
        }

        let mut table = Vec::with_capacity(grouping.n_classes());
        for c in 0..grouping.n_classes() {
            let group = grouping.group(c);
            let mut counts = vec![0u32; n_features];
            for &i in group {
                for (j, &x) in features[i].iter().enumerate() {
                    if x != 0 {
                        counts[j] += 1;
                    }
                }
            }
            let group_size = group.len() as f64;
            let row: Vec<f64> = counts
                .iter()
                .map(|&k| smoothed_bernoulli(f64::from(k), group_size, smoothing))
                .collect();
            table.push(row);
        }

        Ok(Self { table, n_features })
    }

    /// Build a table from caller-supplied presence probabilities.
    ///
    /// Intended for models trained elsewhere. Rows must be non-empty,
    /// rectangular, and hold finite non-negative entries.
    pub fn from_table(table: Vec<Vec<f64>>) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        let n_features = table[0].len();
        for (class, row) in table.iter().enumerate() {
            if row.len() != n_features {
                return Err(Error::RaggedFeatureMatrix {
                    row: class,
                    expected: n_features,
                    got: row.len(),
                });
            }
            for (feature, &p) in row.iter().enumerate() {
                if !p.is_finite() || p < 0.0 {
                    return Err(Error::InvalidLikelihood {
                        class,
                        feature,
                        value: p,
                    });
                }
            }
        }
        Ok(Self { table, n_features })
    }

    /// Number of classes covered.
    pub fn n_classes(&self) -> usize {
        self.table.len()
    }

    /// Feature-vector width F the table was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Presence probabilities for one class, indexed by feature.
    pub fn class_row(&self, ordinal: usize) -> &[f64] {
        &self.table[ordinal]
    }
}

//! Error types for the naive Bayes engine.
//!
//! Every variant is a caller contract violation: the estimation and
//! inference functions are total over well-formed input and never fail at
//! runtime otherwise. Numeric degeneracies (single-label training sets,
//! overflow saturation) are defined behavior, not errors.

use thiserror::Error;

/// Result type alias for naive Bayes operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The training set contains no samples.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Feature rows and labels are not index-aligned.
    #[error("feature matrix has {features} rows but {labels} labels were given")]
    SampleCountMismatch { features: usize, labels: usize },

    /// A feature row disagrees with the width of the first row.
    #[error("feature row {row} has length {got}, expected {expected}")]
    RaggedFeatureMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A test sample disagrees with the trained feature width.
    #[error("test sample {row} has length {got}, expected {expected}")]
    FeatureLengthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Prior and likelihood table cover different class counts.
    #[error("prior covers {prior} classes but likelihood table covers {likelihood}")]
    ClassCountMismatch { prior: usize, likelihood: usize },

    /// Smoothing must be finite and non-negative.
    #[error("smoothing must be finite and non-negative, got {0}")]
    InvalidSmoothing(f64),

    /// A caller-supplied prior weight is outside its valid range.
    #[error("prior weight for class {class} is invalid: {value}")]
    InvalidPrior { class: usize, value: f64 },

    /// A caller-supplied likelihood entry is outside its valid range.
    #[error("likelihood entry at class {class}, feature {feature} is invalid: {value}")]
    InvalidLikelihood {
        class: usize,
        feature: usize,
        value: f64,
    },
}

//! Bernoulli naive Bayes estimation and inference.
//!
//! The pipeline has four stages, consumed in order: label grouping, prior
//! estimation, likelihood estimation with additive smoothing, and posterior
//! computation with normalization. Each stage is a pure function over
//! immutable inputs; [`model::BernoulliNb`] packages the trained state into
//! an immutable value object that can be reused concurrently.

pub mod error;
pub mod grouping;
pub mod likelihood;
pub mod model;
pub mod posterior;
pub mod prior;

pub use error::{Error, Result};
pub use grouping::{ClassIndex, Grouping};
pub use likelihood::Likelihood;
pub use model::{BernoulliNb, FitOptions};
pub use prior::Prior;

//! Core math modules.

pub mod ratio;
pub mod normalize;

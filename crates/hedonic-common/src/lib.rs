//! hedonic-common — Shared types and errors used across all Hedonic crates.

pub mod error;
pub mod features;

// Re-export commonly used types
pub use error::{PredictionError, Result};
pub use features::{feature_spec, FeatureSet, FeatureSpec, FEATURES};

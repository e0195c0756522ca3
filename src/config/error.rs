//! Configuration error types.

use thiserror::Error;

use crate::similarity::SimilarityError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Resolution string could not be parsed as a number.
    #[error("failed to parse resolution '{value}': {source}")]
    ResolutionParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Resolution must be at least 1.
    #[error("invalid resolution {resolution}: must be over 0")]
    InvalidResolution { resolution: usize },

    /// Metric name is not one of the supported metrics.
    #[error("invalid metric '{value}': {source}")]
    InvalidMetric {
        value: String,
        #[source]
        source: SimilarityError,
    },

    /// Threshold string could not be parsed as a float.
    #[error("failed to parse threshold '{value}': {source}")]
    ThresholdParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Threshold is outside `[0.0, 1.0]`.
    #[error("invalid threshold {threshold}: must be between 0.0 and 1.0")]
    InvalidThreshold { threshold: f64 },
}

//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `BLINK_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use tracing::warn;

use crate::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_METRIC, DEFAULT_RESOLUTION};
use crate::matcher::MatcherConfig;
use crate::similarity::Metric;

/// Comparison settings loaded from environment variables.
///
/// Use [`Config::from_env`] to read `BLINK_*` overrides on top of defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Samples per pattern. Default: `64`.
    pub resolution: usize,

    /// Metric used for match decisions. Default: `hamming`.
    pub metric: Metric,

    /// Match threshold (exclusive). Default: `0.70`.
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            metric: DEFAULT_METRIC,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_RESOLUTION: &'static str = "BLINK_RESOLUTION";
    const ENV_METRIC: &'static str = "BLINK_METRIC";
    const ENV_THRESHOLD: &'static str = "BLINK_THRESHOLD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let resolution = Self::parse_resolution_from_env(defaults.resolution)?;
        let metric = Self::parse_metric_from_env(defaults.metric)?;
        let threshold = Self::parse_threshold_from_env(defaults.threshold)?;

        Ok(Self {
            resolution,
            metric,
            threshold,
        })
    }

    /// Checks value ranges that parsing alone does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution < 1 {
            return Err(ConfigError::InvalidResolution {
                resolution: self.resolution,
            });
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold {
                threshold: self.threshold,
            });
        }

        Ok(())
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::new(self.resolution, self.metric).with_threshold(self.threshold)
    }

    fn parse_resolution_from_env(default: usize) -> Result<usize, ConfigError> {
        match Self::read_env(Self::ENV_RESOLUTION) {
            Some(value) => {
                let resolution: usize = value.parse().map_err(|e| ConfigError::ResolutionParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if resolution == 0 {
                    return Err(ConfigError::InvalidResolution { resolution });
                }

                Ok(resolution)
            }
            None => Ok(default),
        }
    }

    fn parse_metric_from_env(default: Metric) -> Result<Metric, ConfigError> {
        match Self::read_env(Self::ENV_METRIC) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidMetric { value, source: e }),
            None => Ok(default),
        }
    }

    fn parse_threshold_from_env(default: f64) -> Result<f64, ConfigError> {
        match Self::read_env(Self::ENV_THRESHOLD) {
            Some(value) => {
                let threshold: f64 = value.parse().map_err(|e| ConfigError::ThresholdParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if !(0.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { threshold });
                }

                Ok(threshold)
            }
            None => Ok(default),
        }
    }

    /// Trimmed value of `var_name`; unset and blank values read as `None`.
    fn read_env(var_name: &str) -> Option<String> {
        let value = env::var(var_name).ok()?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            warn!(var = var_name, "Ignoring blank environment variable, using default");
            return None;
        }
        Some(trimmed.to_string())
    }
}

use crate::constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_METRIC, DEFAULT_RESOLUTION};
use crate::pattern::PatternError;
use crate::similarity::Metric;

use super::error::MatchError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Samples taken from every pattern before comparison.
    pub resolution: usize,

    pub metric: Metric,

    /// A candidate matches when its score is strictly above this value.
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            metric: DEFAULT_METRIC,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl MatcherConfig {
    pub fn new(resolution: usize, metric: Metric) -> Self {
        Self {
            resolution,
            metric,
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.resolution < 1 {
            return Err(PatternError::InvalidResolution {
                resolution: self.resolution,
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidThreshold {
                threshold: self.threshold,
            });
        }

        Ok(())
    }
}

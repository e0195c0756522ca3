//! Cross-cutting, shared constants.
//!
//! Config, matcher and binary defaults are all derived from here so they cannot drift.

use crate::similarity::Metric;

/// Number of samples taken from an interval sequence when nothing else is configured.
pub const DEFAULT_RESOLUTION: usize = 64;

/// Minimum score (exclusive) for a candidate to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.70;

pub const DEFAULT_METRIC: Metric = Metric::Hamming;

/// Storage word used by [`FixedBitVector`](crate::bits::FixedBitVector).
pub type BitWord = u64;

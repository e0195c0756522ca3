//! Blink library crate (used by the `blink` binary and integration tests).
//!
//! Converts alternating on/off interval sequences into fixed-width bit vectors and
//! scores the similarity of two such vectors.
//!
//! # Public API Surface
//!
//! ## Core
//! - [`IntervalSequence`] - Durations of an on/off signal, starting "on"
//! - [`digitize`], [`instant_at`] - Resampling at a chosen resolution
//! - [`FixedBitVector`] - Bit vector with a declared length
//! - [`score`], [`score_all`], [`Metric`] - Hamming, Jaccard, Dice and Cosine coefficients
//!
//! ## Matching
//! - [`PatternMatcher`], [`MatcherConfig`], [`MatchResult`] - Template vs. candidate matching
//!
//! ## Utilities
//! - [`parse_interval_list`] - `"[84, 267, 45]"` to a list of durations
//! - [`Config`] - `BLINK_*` environment configuration
//!
//! # Example
//!
//! ```
//! use blink::{IntervalSequence, Metric, digitize, score};
//!
//! let a: IntervalSequence = "[200, 200, 200, 200, 200]".parse().unwrap();
//! let b = IntervalSequence::from([0, 200, 200, 200, 200, 200]);
//!
//! let a = digitize(&a, 64).unwrap();
//! let b = digitize(&b, 64).unwrap();
//!
//! assert_eq!(score(&a, &a, Metric::Jaccard).unwrap(), 1.0);
//! assert_eq!(score(&a, &b, Metric::Hamming).unwrap(), 0.0);
//! ```

pub mod bits;
pub mod config;
pub mod constants;
pub mod matcher;
pub mod parser;
pub mod pattern;
pub mod similarity;

pub use bits::{FixedBitVector, LengthMismatch};
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_MATCH_THRESHOLD, DEFAULT_METRIC, DEFAULT_RESOLUTION};
pub use matcher::{
    CandidateScores, MatchError, MatchResult, MatcherConfig, PatternMatcher, ScoredCandidate,
};
pub use parser::{ParseError, parse_interval_list};
pub use pattern::{IntervalSequence, PatternError, digitize, instant_at};
pub use similarity::{Metric, OverlapCounts, SimilarityError, score, score_all};

//! Template matching over raw interval sequences.
//!
//! [`PatternMatcher`] digitizes a template once, then digitizes and scores each
//! candidate at the same resolution. [`PatternMatcher::verify`] accepts the best
//! candidate only when its score is strictly above the configured threshold.

pub mod config;
pub mod error;
pub mod pattern_matcher;
pub mod types;


pub use config::MatcherConfig;
pub use error::MatchError;
pub use pattern_matcher::PatternMatcher;
pub use types::{CandidateScores, MatchResult, ScoredCandidate};

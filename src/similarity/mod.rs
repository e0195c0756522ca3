//! Set-based similarity coefficients over fixed-width bit vectors.
//!
//! All scores lie between 0.0 (completely different) and 1.0 (equal). Inputs are
//! borrowed and never mutated, so the same vector can be compared from several
//! threads at once.
//!
//! # Degenerate inputs
//!
//! Jaccard, Dice and Cosine are 0/0 when both vectors have no set bits. Two such
//! vectors are treated as identical and score 1.0. Cosine against a single all-zero
//! vector scores 0.0.

pub mod engine;
pub mod error;
pub mod metric;


pub use engine::{OverlapCounts, score, score_all};
pub use error::SimilarityError;
pub use metric::Metric;

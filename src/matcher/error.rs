use thiserror::Error;

use crate::pattern::PatternError;
use crate::similarity::SimilarityError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("threshold must be between 0.0 and 1.0, got {threshold}")]
    InvalidThreshold { threshold: f64 },
}

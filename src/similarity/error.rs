use thiserror::Error;

use crate::bits::LengthMismatch;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("bit vector sizes must be equal: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    #[error("unsupported metric '{name}'")]
    UnsupportedMetric { name: String },
}

impl From<LengthMismatch> for SimilarityError {
    fn from(err: LengthMismatch) -> Self {
        SimilarityError::SizeMismatch {
            left: err.left,
            right: err.right,
        }
    }
}

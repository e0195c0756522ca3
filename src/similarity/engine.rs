use tracing::debug;

use crate::bits::FixedBitVector;

use super::error::SimilarityError;
use super::metric::Metric;

/// Population counts shared by all metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapCounts {
    /// Declared length of both vectors.
    pub len: usize,
    /// `|A AND B|`
    pub intersection: usize,
    /// `|A OR B|`
    pub union: usize,
    /// `|A XOR B|`
    pub differing: usize,
    /// `|A|`
    pub left: usize,
    /// `|B|`
    pub right: usize,
}

impl OverlapCounts {
    /// Counts the overlap between `a` and `b`. Neither input is modified; the bitwise
    /// operations run on copies.
    pub fn between(a: &FixedBitVector, b: &FixedBitVector) -> Result<Self, SimilarityError> {
        if a.len() != b.len() {
            return Err(SimilarityError::SizeMismatch {
                left: a.len(),
                right: b.len(),
            });
        }

        Ok(Self {
            len: a.len(),
            intersection: a.and(b)?.count_ones(),
            union: a.or(b)?.count_ones(),
            differing: a.xor(b)?.count_ones(),
            left: a.count_ones(),
            right: b.count_ones(),
        })
    }

    /// Score under `metric`, in `[0.0, 1.0]`.
    ///
    /// Two all-zero vectors score 1.0 under every metric. Under cosine, an all-zero
    /// vector against a non-zero one scores 0.0.
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Hamming => {
                if self.len == 0 {
                    return 1.0;
                }
                1.0 - self.differing as f64 / self.len as f64
            }
            Metric::Jaccard => {
                if self.union == 0 {
                    return 1.0;
                }
                self.intersection as f64 / self.union as f64
            }
            Metric::Dice => {
                let total = self.left + self.right;
                if total == 0 {
                    return 1.0;
                }
                2.0 * self.intersection as f64 / total as f64
            }
            Metric::Cosine => match (self.left, self.right) {
                (0, 0) => 1.0,
                (0, _) | (_, 0) => 0.0,
                (left, right) => self.intersection as f64 / (left as f64 * right as f64).sqrt(),
            },
        }
    }
}

/// Similarity of two equal-length bit vectors under `metric`.
pub fn score(
    a: &FixedBitVector,
    b: &FixedBitVector,
    metric: Metric,
) -> Result<f64, SimilarityError> {
    let counts = OverlapCounts::between(a, b)?;
    let score = counts.score(metric);

    debug!(
        metric = %metric,
        len = counts.len,
        intersection = counts.intersection,
        union = counts.union,
        score,
        "Computed similarity"
    );

    Ok(score)
}

/// Scores `a` against `b` under every metric in [`Metric::ALL`] order.
pub fn score_all(
    a: &FixedBitVector,
    b: &FixedBitVector,
) -> Result<Vec<(Metric, f64)>, SimilarityError> {
    let counts = OverlapCounts::between(a, b)?;
    Ok(Metric::ALL
        .iter()
        .map(|&metric| (metric, counts.score(metric)))
        .collect())
}

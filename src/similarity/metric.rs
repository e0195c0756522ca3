use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimilarityError;

/// Similarity coefficient used to compare two equal-length bit vectors.
///
/// With `n = |A AND B|`, `u = |A OR B|`, `s = |A|`, `t = |B|` and `L` the declared length:
///
/// | Metric  | Score                      |
/// |---------|----------------------------|
/// | Hamming | `1 - \|A XOR B\| / L`      |
/// | Jaccard | `n / u`                    |
/// | Dice    | `2n / (s + t)`             |
/// | Cosine  | `n / sqrt(s * t)`          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Fraction of positions that agree.
    Hamming,
    /// Intersection over union. Identical to the Tanimoto coefficient on bit vectors.
    #[serde(alias = "tanimoto")]
    Jaccard,
    /// Dice-Sorensen coefficient.
    Dice,
    /// Cosine of the angle between the two vectors.
    Cosine,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Hamming,
        Metric::Jaccard,
        Metric::Dice,
        Metric::Cosine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Hamming => "hamming",
            Metric::Jaccard => "jaccard",
            Metric::Dice => "dice",
            Metric::Cosine => "cosine",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Metric {
    type Err = SimilarityError;

    /// Case-insensitive; `tanimoto` is accepted as an alias of [`Metric::Jaccard`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamming" => Ok(Metric::Hamming),
            "jaccard" | "tanimoto" => Ok(Metric::Jaccard),
            "dice" => Ok(Metric::Dice),
            "cosine" => Ok(Metric::Cosine),
            _ => Err(SimilarityError::UnsupportedMetric {
                name: s.to_string(),
            }),
        }
    }
}

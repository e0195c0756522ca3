use serde::Serialize;

use crate::bits::FixedBitVector;
use crate::pattern::IntervalSequence;
use crate::similarity::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Outcome of matching candidates against a template.
pub enum MatchResult {
    /// Best candidate scored above the threshold.
    Matched {
        score: f64,
    },
    /// Best candidate did not exceed the threshold.
    Rejected {
        /// Best score observed.
        top_score: f64,
    },
    NoCandidates,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// Returns the best score (if any candidate was scored).
    pub fn score(&self) -> Option<f64> {
        match self {
            MatchResult::Matched { score } | MatchResult::Rejected { top_score: score } => {
                Some(*score)
            }
            MatchResult::NoCandidates => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchResult::Matched { .. } => "MATCHED",
            MatchResult::Rejected { .. } => "REJECTED",
            MatchResult::NoCandidates => "NO_CANDIDATES",
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Matched { score } => write!(f, "MATCHED (score: {:.4})", score),
            MatchResult::Rejected { top_score } => {
                write!(f, "REJECTED (top_score: {:.4})", top_score)
            }
            MatchResult::NoCandidates => write!(f, "NO_CANDIDATES"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A candidate pattern with its score against the template.
pub struct ScoredCandidate {
    /// Position of the candidate in the input.
    pub index: usize,
    pub pattern: IntervalSequence,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(index: usize, pattern: IntervalSequence, score: f64) -> Self {
        Self {
            index,
            pattern,
            score,
        }
    }
}

/// A digitized candidate with its score under every metric.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateScores {
    pub bits: FixedBitVector,
    /// In [`Metric::ALL`] order.
    pub scores: Vec<(Metric, f64)>,
}

impl CandidateScores {
    pub fn score(&self, metric: Metric) -> Option<f64> {
        self.scores
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|&(_, score)| score)
    }
}

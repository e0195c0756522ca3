use std::cmp::Ordering;

use tracing::{debug, info};

use crate::bits::FixedBitVector;
use crate::pattern::{IntervalSequence, digitize};
use crate::similarity::{score, score_all};

use super::config::MatcherConfig;
use super::error::MatchError;
use super::types::{CandidateScores, MatchResult, ScoredCandidate};

/// Compares raw interval sequences against a template digitized once up front.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    template: IntervalSequence,
    template_bits: FixedBitVector,
    config: MatcherConfig,
}

impl PatternMatcher {
    pub fn new(template: IntervalSequence, config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let template_bits = digitize(&template, config.resolution)?;

        debug!(
            resolution = config.resolution,
            metric = %config.metric,
            ones = template_bits.count_ones(),
            "Template digitized"
        );

        Ok(Self {
            template,
            template_bits,
            config,
        })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn template(&self) -> &IntervalSequence {
        &self.template
    }

    pub fn template_bits(&self) -> &FixedBitVector {
        &self.template_bits
    }

    /// Score of `candidate` under the configured metric.
    pub fn compare(&self, candidate: &IntervalSequence) -> Result<f64, MatchError> {
        let bits = digitize(candidate, self.config.resolution)?;
        Ok(score(&self.template_bits, &bits, self.config.metric)?)
    }

    /// Digitized `candidate` and its scores under every metric.
    pub fn compare_all(&self, candidate: &IntervalSequence) -> Result<CandidateScores, MatchError> {
        let bits = digitize(candidate, self.config.resolution)?;
        let scores = score_all(&self.template_bits, &bits)?;
        Ok(CandidateScores { bits, scores })
    }

    pub fn score_candidates(
        &self,
        candidates: Vec<IntervalSequence>,
    ) -> Result<Vec<ScoredCandidate>, MatchError> {
        candidates
            .into_iter()
            .enumerate()
            .map(|(index, pattern)| {
                let score = self.compare(&pattern)?;
                Ok(ScoredCandidate::new(index, pattern, score))
            })
            .collect()
    }

    /// Picks the best-scoring candidate and accepts it if it beats the threshold.
    pub fn verify(
        &self,
        candidates: Vec<IntervalSequence>,
    ) -> Result<(Option<ScoredCandidate>, MatchResult), MatchError> {
        if candidates.is_empty() {
            debug!("No candidates provided for matching");
            return Ok((None, MatchResult::NoCandidates));
        }

        let mut scored = self.score_candidates(candidates)?;
        sort_descending(&mut scored);

        let top = scored.swap_remove(0);
        let result = self.decide(Some(top.score));
        if result.is_match() {
            info!(index = top.index, score = top.score, "Pattern matched template");
            Ok((Some(top), result))
        } else {
            Ok((None, result))
        }
    }

    /// Applies the threshold to the best observed score, if any.
    pub fn decide(&self, top_score: Option<f64>) -> MatchResult {
        let threshold = self.config.threshold;
        match top_score {
            None => MatchResult::NoCandidates,
            Some(score) if score > threshold => MatchResult::Matched { score },
            Some(score) => {
                debug!(score, threshold, "Top candidate below threshold - no match");
                MatchResult::Rejected { top_score: score }
            }
        }
    }

    /// The `top_n` best candidates, highest score first. Ties keep input order.
    pub fn rank(
        &self,
        candidates: Vec<IntervalSequence>,
        top_n: usize,
    ) -> Result<Vec<ScoredCandidate>, MatchError> {
        let mut scored = self.score_candidates(candidates)?;
        sort_descending(&mut scored);
        scored.truncate(top_n);
        Ok(scored)
    }
}

fn sort_descending(scored: &mut [ScoredCandidate]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

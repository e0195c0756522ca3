use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::{ParseError, parse_interval_list};

/// Durations of an alternating on/off signal, starting "on".
///
/// Index 0 is on, index 1 is off, index 2 is on again, and so on. A leading `0`
/// therefore starts the signal "off".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSequence {
    intervals: Vec<u64>,
}

impl IntervalSequence {
    pub fn new(intervals: Vec<u64>) -> Self {
        Self { intervals }
    }

    /// Total duration in time units (saturating).
    pub fn total(&self) -> u64 {
        self.intervals
            .iter()
            .fold(0u64, |acc, &interval| acc.saturating_add(interval))
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.intervals
    }
}

impl From<Vec<u64>> for IntervalSequence {
    fn from(intervals: Vec<u64>) -> Self {
        Self::new(intervals)
    }
}

impl From<&[u64]> for IntervalSequence {
    fn from(intervals: &[u64]) -> Self {
        Self::new(intervals.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for IntervalSequence {
    fn from(intervals: [u64; N]) -> Self {
        Self::new(intervals.to_vec())
    }
}

impl FromStr for IntervalSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval_list(s).map(Self::new)
    }
}

/// Renders as `[84, 267, 45]`, the same format accepted by [`FromStr`].
impl fmt::Display for IntervalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", interval)?;
        }
        f.write_str("]")
    }
}

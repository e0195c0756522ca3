//! Textual interval lists.
//!
//! Accepts the bracketed, comma-separated form `"[84, 267, 45]"`. Brackets are
//! optional and whitespace around tokens is ignored.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("interval list is empty")]
    Empty,

    #[error("invalid interval '{token}' at position {position}: {source}")]
    InvalidToken {
        token: String,
        position: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Parses `"[84, 267, 45]"` (or `"84,267,45"`) into a list of durations.
///
/// Every token must be a non-negative integer; an empty token (`"1,,2"`) is rejected.
pub fn parse_interval_list(text: &str) -> Result<Vec<u64>, ParseError> {
    let stripped: String = text.chars().filter(|c| !matches!(c, '[' | ']')).collect();

    if stripped.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    stripped
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<u64>().map_err(|source| ParseError::InvalidToken {
                token: token.to_string(),
                position,
                source,
            })
        })
        .collect()
}

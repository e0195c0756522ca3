use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("resolution must be over 0, got {resolution}")]
    InvalidResolution { resolution: usize },

    #[error(
        "pattern too short for the given resolution: total duration {total} < resolution {resolution}"
    )]
    PatternTooShort { total: u64, resolution: usize },

    #[error("instant {instant} out of range: must be between 1 and {total}")]
    InstantOutOfRange { instant: u64, total: u64 },
}

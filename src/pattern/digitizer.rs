use tracing::debug;

use crate::bits::FixedBitVector;

use super::error::PatternError;
use super::types::IntervalSequence;

/// Resamples `pattern` into `resolution` evenly spaced single-instant samples.
///
/// Sample `i` reads the signal at instant `round((i + 1) * total / resolution)`.
/// No majority vote is taken within a sampling period.
pub fn digitize(
    pattern: &IntervalSequence,
    resolution: usize,
) -> Result<FixedBitVector, PatternError> {
    if resolution < 1 {
        return Err(PatternError::InvalidResolution { resolution });
    }

    let total = pattern.total();
    if total < resolution as u64 {
        return Err(PatternError::PatternTooShort { total, resolution });
    }

    let sampling_period = total as f64 / resolution as f64;

    debug!(
        total,
        resolution,
        sampling_period,
        intervals = pattern.len(),
        "Digitizing pattern"
    );

    let mut bits = FixedBitVector::new(resolution);
    for i in 0..resolution {
        let instant = ((i + 1) as f64 * sampling_period).round() as u64;
        bits.set(i, signal_at(pattern.as_slice(), instant.clamp(1, total)));
    }

    Ok(bits)
}

/// Whether the signal is "on" at `instant` (1-based, `1..=total`).
pub fn instant_at(pattern: &IntervalSequence, instant: u64) -> Result<bool, PatternError> {
    let total = pattern.total();
    if instant < 1 || instant > total {
        return Err(PatternError::InstantOutOfRange { instant, total });
    }
    Ok(signal_at(pattern.as_slice(), instant))
}

fn signal_at(intervals: &[u64], instant: u64) -> bool {
    let mut on = true;
    let mut elapsed = 0u64;
    for &interval in intervals {
        elapsed = elapsed.saturating_add(interval);
        if elapsed >= instant {
            break;
        }
        on = !on;
    }
    on
}

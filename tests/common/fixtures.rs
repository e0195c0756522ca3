//! Test fixtures for integration tests.

#![allow(dead_code)]

use blink::{FixedBitVector, IntervalSequence, digitize};

pub const RESOLUTION: usize = 64;

/// Five equal on/off/on/off/on intervals.
pub const EVEN_PATTERN: [u64; 5] = [200, 200, 200, 200, 200];

/// [`EVEN_PATTERN`] shifted to start "off".
pub const EVEN_PATTERN_INVERSE: [u64; 6] = [0, 200, 200, 200, 200, 200];

pub const TEMPLATE: [u64; 13] = [84, 267, 45, 116, 55, 124, 55, 277, 65, 570, 56, 333, 46];

/// A second recording of the same behaviour as [`TEMPLATE`].
pub const TEMPLATE_RECORDING: [u64; 13] =
    [55, 267, 36, 135, 36, 134, 37, 295, 28, 618, 36, 305, 37];

pub fn digitized(intervals: &[u64], resolution: usize) -> FixedBitVector {
    digitize(&IntervalSequence::from(intervals), resolution)
        .expect("fixture pattern should be long enough")
}

/// Deterministic pseudo-random intervals in `1..=max_interval`.
pub fn generate_deterministic_pattern(
    seed: u64,
    len: usize,
    max_interval: u64,
) -> IntervalSequence {
    let mut state = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let intervals = (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) % max_interval + 1
        })
        .collect();
    IntervalSequence::new(intervals)
}

/// Deterministic pseudo-random bit vector of `len` bits.
pub fn generate_deterministic_bits(seed: u64, len: usize) -> FixedBitVector {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state & 1 == 1
        })
        .collect()
}

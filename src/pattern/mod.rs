//! Interval sequences and their digitization into fixed-width bit vectors.
//!
//! An [`IntervalSequence`] such as `[200, 200, 200]` means 200 time units on, 200 off,
//! 200 on. [`digitize`] resamples it at a caller-chosen resolution so that patterns
//! recorded at different granularities can be compared bit for bit.

pub mod digitizer;
pub mod error;
pub mod types;


pub use digitizer::{digitize, instant_at};
pub use error::PatternError;
pub use types::IntervalSequence;

//! Compares two recordings of a blinking signal at several resolutions.
//!
//! Run with: `cargo run --example compare_patterns`

use anyhow::Result;
use blink::{IntervalSequence, Metric, MatcherConfig, PatternMatcher, digitize, score_all};

fn main() -> Result<()> {
    let template: IntervalSequence =
        "[84, 267, 45, 116, 55, 124, 55, 277, 65, 570, 56, 333, 46]".parse()?;
    let recording: IntervalSequence =
        "[55, 267, 36, 135, 36, 134, 37, 295, 28, 618, 36, 305, 37]".parse()?;

    for resolution in [16, 64, 256] {
        let a = digitize(&template, resolution)?;
        let b = digitize(&recording, resolution)?;

        println!("resolution {}", resolution);
        println!("  {}", a);
        println!("  {}", b);
        for (metric, value) in score_all(&a, &b)? {
            println!("  {:<8} {:.4}", metric, value);
        }
    }

    let matcher = PatternMatcher::new(
        template,
        MatcherConfig::new(64, Metric::Dice).with_threshold(0.6),
    )?;
    let (_, result) = matcher.verify(vec![recording])?;
    println!("{}", result);

    Ok(())
}

//! Blink command-line entrypoint.
//!
//! ```text
//! blink [--json] <template> <candidate> [<candidate>...]
//! ```
//!
//! Patterns are interval lists such as `"[84, 267, 45]"`. Resolution, metric and
//! threshold come from `BLINK_RESOLUTION`, `BLINK_METRIC` and `BLINK_THRESHOLD`.

use anyhow::Context;
use serde::Serialize;

use blink::{Config, IntervalSequence, MatchResult, Metric, PatternMatcher};

const USAGE: &str = "usage: blink [--json] <template> <candidate> [<candidate>...]";

#[derive(Debug, Serialize)]
struct MetricScore {
    metric: Metric,
    score: f64,
}

#[derive(Debug, Serialize)]
struct CandidateReport {
    index: usize,
    pattern: IntervalSequence,
    bits: String,
    scores: Vec<MetricScore>,
}

#[derive(Debug, Serialize)]
struct Report {
    template: IntervalSequence,
    template_bits: String,
    resolution: usize,
    metric: Metric,
    threshold: f64,
    candidates: Vec<CandidateReport>,
    result: MatchResult,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");

    if args.len() < 2 || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let config = Config::from_env()?;
    config.validate()?;

    tracing::debug!(
        resolution = config.resolution,
        metric = %config.metric,
        threshold = config.threshold,
        "Configuration loaded"
    );

    let template: IntervalSequence = args[0]
        .parse()
        .with_context(|| format!("invalid template '{}'", args[0]))?;
    let candidates = args[1..]
        .iter()
        .map(|arg| {
            arg.parse::<IntervalSequence>()
                .with_context(|| format!("invalid candidate '{}'", arg))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = build_report(template, candidates, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|arg| arg != flag);
    args.len() != before
}

fn build_report(
    template: IntervalSequence,
    candidates: Vec<IntervalSequence>,
    config: &Config,
) -> anyhow::Result<Report> {
    let matcher = PatternMatcher::new(template, config.matcher_config())
        .context("failed to digitize template")?;

    let mut top_score: Option<f64> = None;
    let candidate_reports = candidates
        .into_iter()
        .enumerate()
        .map(|(index, pattern)| {
            let compared = matcher
                .compare_all(&pattern)
                .with_context(|| format!("failed to score candidate {}", index))?;

            if let Some(score) = compared.score(config.metric) {
                top_score = Some(top_score.map_or(score, |best| best.max(score)));
            }

            Ok(CandidateReport {
                index,
                pattern,
                bits: compared.bits.to_string(),
                scores: compared
                    .scores
                    .into_iter()
                    .map(|(metric, score)| MetricScore { metric, score })
                    .collect(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let result = matcher.decide(top_score);

    Ok(Report {
        template: matcher.template().clone(),
        template_bits: matcher.template_bits().to_string(),
        resolution: config.resolution,
        metric: config.metric,
        threshold: config.threshold,
        candidates: candidate_reports,
        result,
    })
}

fn print_report(report: &Report) {
    println!("template   {}", report.template);
    println!("           {}", report.template_bits);

    for candidate in &report.candidates {
        println!();
        println!("candidate {} {}", candidate.index, candidate.pattern);
        println!("           {}", candidate.bits);
        for entry in &candidate.scores {
            println!("  {:<8} {:.6}", entry.metric.name(), entry.score);
        }
    }

    println!();
    println!(
        "{} at resolution {} ({} > {})",
        report.result, report.resolution, report.metric, report.threshold
    );
}

//! Tests for the `blink` binary.

mod common;

use std::process::{Command, Output};

use common::fixtures::{TEMPLATE, TEMPLATE_RECORDING};

fn list(intervals: &[u64]) -> String {
    format!("{:?}", intervals)
}

fn run_blink(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_blink"));
    command
        .args(args)
        .env_remove("BLINK_RESOLUTION")
        .env_remove("BLINK_METRIC")
        .env_remove("BLINK_THRESHOLD")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("failed to run blink binary")
}

#[test]
fn test_cli_reports_match() {
    let template = list(&TEMPLATE);
    let candidate = list(&TEMPLATE_RECORDING);

    let output = run_blink(&[&template, &candidate], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("jaccard  0.500000"), "stdout: {}", stdout);
    assert!(stdout.contains("MATCHED (score: 0.8906)"), "stdout: {}", stdout);
}

#[test]
fn test_cli_json_output() {
    let template = list(&TEMPLATE);
    let candidate = list(&TEMPLATE_RECORDING);

    let output = run_blink(
        &["--json", &template, &candidate],
        &[("BLINK_METRIC", "jaccard")],
    );
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["metric"], "jaccard");
    assert_eq!(report["resolution"], 64);
    assert_eq!(report["result"]["status"], "rejected");
    assert_eq!(report["result"]["top_score"], 0.5);
    assert_eq!(report["candidates"][0]["bits"].as_str().unwrap().len(), 64);
}

#[test]
fn test_cli_rejects_malformed_list() {
    let output = run_blink(&["[1, 2, x]", "[1, 2]"], &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid template"));
}

#[test]
fn test_cli_rejects_unknown_metric() {
    let template = list(&TEMPLATE);
    let output = run_blink(&[&template, &template], &[("BLINK_METRIC", "euclidean")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("euclidean"));
}

#[test]
fn test_cli_usage_without_candidates() {
    let output = run_blink(&["[1, 2, 3]"], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn test_cli_decides_on_best_candidate() {
    let template = list(&TEMPLATE);
    let recording = list(&TEMPLATE_RECORDING);

    let output = run_blink(
        &["--json", &template, &recording, &template],
        &[("BLINK_METRIC", "jaccard")],
    );
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["result"]["status"], "matched");
    assert_eq!(report["result"]["score"], 1.0);
    assert_eq!(report["candidates"][1]["bits"], report["template_bits"]);
    assert_eq!(report["candidates"][0]["scores"][1]["score"], 0.5);
}

#[test]
fn test_cli_rejects_short_candidate() {
    let template = list(&TEMPLATE);
    let output = run_blink(&[&template, "[1, 1]"], &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to score candidate 0"));
}

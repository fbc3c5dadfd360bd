//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `quadfit` binary to verify that
//! argument parsing, report output, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("quadfit").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fit"))
        .stdout(predicate::str::contains("datasets"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quadfit"));
}

#[test]
fn datasets_lists_builtin_sets() {
    cmd()
        .arg("datasets")
        .assert()
        .success()
        .stdout(predicate::str::contains("primary"))
        .stdout(predicate::str::contains("alternate"))
        .stdout(predicate::str::contains("legacy"));
}

// ---------------------------------------------------------------------------
// fit
// ---------------------------------------------------------------------------

#[test]
fn fit_defaults_to_primary_dataset() {
    cmd()
        .arg("fit")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "p/z ratio distance number 1: 1.292 (inverse: 0.774)",
        ))
        .stdout(predicate::str::contains("c1, c2: 1.437, -0.525"))
        .stdout(predicate::str::contains("measured: 0.291; c1-c2 model: 0.297"));
}

#[test]
fn fit_alternate_dataset() {
    cmd()
        .args(["fit", "--dataset", "alternate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c1, c2: 0.966, 0.287"));
}

#[test]
fn fit_unknown_dataset_is_rejected_by_parser() {
    cmd()
        .args(["fit", "--dataset", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn fit_explicit_samples() {
    cmd()
        .args(["fit", "--z", "1,2", "--p", "3,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c1, c2: 1.000, 2.000"));
}

#[test]
fn fit_json_format() {
    cmd()
        .args(["fit", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"coefficients\""))
        .stdout(predicate::str::contains("\"ratios\""));
}

#[test]
fn fit_single_sample_fails_with_small_determinant() {
    cmd()
        .args(["fit", "--z", "0.5", "--p", "0.7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inversion threshold"));
}

#[test]
fn fit_mismatched_samples_fail() {
    cmd()
        .args(["fit", "--z", "0.1,0.2", "--p", "0.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same number of samples"));
}

#[test]
fn fit_z_without_p_fails() {
    cmd()
        .args(["fit", "--z", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--z was given without --p"));

    cmd()
        .args(["fit", "--p", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--p was given without --z"));
}

#[test]
fn fit_config_with_partial_samples_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fit.json");
    std::fs::write(&path, r#"{"samples": {"z": [1.0, 2.0, 3.0]}}"#).unwrap();
    cmd()
        .arg("fit")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn fit_rejects_empty_sample_item() {
    cmd()
        .args(["fit", "--z", "1,,2", "--p", "3,10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty value"));
}

#[test]
fn fit_threshold_override_allows_ill_conditioned_fit() {
    cmd()
        .args(["fit", "--z", "0.1,0.2,0.3", "--p", "0.23,0.52,0.87"])
        .assert()
        .failure();

    cmd()
        .args([
            "fit",
            "--z",
            "0.1,0.2,0.3",
            "--p",
            "0.23,0.52,0.87",
            "--threshold",
            "1e-6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("c1, c2: 2.000, 3.000"));
}

#[test]
fn fit_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    cmd()
        .args(["fit", "-o"])
        .arg(&path)
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("c1, c2: 1.437, -0.525"));
}

#[test]
fn fit_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fit.json");
    std::fs::write(&path, r#"{"samples": {"z": [1.0, 2.0], "p": [3.0, 10.0]}}"#).unwrap();
    cmd()
        .arg("fit")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("c1, c2: 1.000, 2.000"));
}

#[test]
fn fit_missing_config_file_errors() {
    cmd()
        .args(["fit", "/nonexistent/fit.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

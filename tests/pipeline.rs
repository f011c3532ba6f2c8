//! End-to-end pipeline tests
//!
//! Exercises the full load -> compare -> persist flow over real files,
//! mirroring how the tool runs inside a CI job.

use perfcheck::{ComparisonReport, MetricKey, Status, compare, load_baseline, load_current, write_json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_report(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write report fixture");
    path
}

const BASELINE_REPORT: &str = "\
Test suite timing summary

1. Unit Tests Performance:
   real 1m0.0s
2. Shared Tests Performance:
   real 0m30.0s
3. Integration Tests Performance:
   real 2m0.0s
";

#[test]
fn test_stable_run_at_exact_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let baseline_path = write_report(&temp_dir, "baseline.txt", BASELINE_REPORT);

    // unit_tests lands exactly on the 1.5 threshold; strict comparison
    // keeps it out of the regression bucket.
    let current_path = write_report(
        &temp_dir,
        "current.txt",
        "1. Unit Tests Performance:\n real 1m30.0s\n\
         2. Shared Tests Performance:\n real 0m30.0s\n",
    );

    let baseline = load_baseline(&baseline_path);
    let current = load_current(&current_path);
    let report = compare(&baseline, &current, 1.5).unwrap();

    assert!(!report.has_regression);
    assert_eq!(report.results[&MetricKey::UnitTests].status, Status::Stable);
    assert_eq!(
        report.results[&MetricKey::SharedTests].status,
        Status::Stable
    );
}

#[test]
fn test_regression_just_above_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let baseline_path = write_report(&temp_dir, "baseline.txt", BASELINE_REPORT);
    let current_path = write_report(
        &temp_dir,
        "current.txt",
        "1. Unit Tests Performance:\n real 1m31.0s\n",
    );

    let baseline = load_baseline(&baseline_path);
    let current = load_current(&current_path);
    let report = compare(&baseline, &current, 1.5).unwrap();

    assert!(report.has_regression);
    assert_eq!(
        report.results[&MetricKey::UnitTests].status,
        Status::Regression
    );
    // integration_tests only exists in the baseline and is ignored.
    assert!(!report.results.contains_key(&MetricKey::IntegrationTests));
}

#[test]
fn test_first_run_without_baseline() {
    let temp_dir = TempDir::new().unwrap();
    let missing_baseline = temp_dir.path().join("no-baseline.txt");
    let current_path = write_report(
        &temp_dir,
        "current.txt",
        "4. E2E Tests Performance:\n real 3m12.5s\n",
    );

    let baseline = load_baseline(&missing_baseline);
    assert!(baseline.is_empty());

    let current = load_current(&current_path);
    let report = ComparisonReport::from_new(&current);

    assert!(!report.has_regression);
    assert_eq!(report.results[&MetricKey::E2eTests].status, Status::New);
    assert_eq!(report.results[&MetricKey::E2eTests].current, 192.5);
}

#[test]
fn test_line_order_does_not_change_statuses() {
    let temp_dir = TempDir::new().unwrap();
    let baseline_path = write_report(&temp_dir, "baseline.txt", BASELINE_REPORT);

    let forward = write_report(
        &temp_dir,
        "forward.txt",
        "1. Unit Tests Performance:\n real 0m50.0s\n\
         2. Shared Tests Performance:\n real 1m0.0s\n",
    );
    let reversed = write_report(
        &temp_dir,
        "reversed.txt",
        "2. Shared Tests Performance:\n real 1m0.0s\n\
         1. Unit Tests Performance:\n real 0m50.0s\n",
    );

    let baseline = load_baseline(&baseline_path);
    let a = compare(&baseline, &load_current(&forward), 1.5).unwrap();
    let b = compare(&baseline, &load_current(&reversed), 1.5).unwrap();

    for key in MetricKey::ALL {
        assert_eq!(
            a.results.get(&key).map(|r| r.status),
            b.results.get(&key).map(|r| r.status)
        );
    }
}

#[test]
fn test_json_output_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let baseline_path = write_report(&temp_dir, "baseline.txt", BASELINE_REPORT);
    let current_path = write_report(
        &temp_dir,
        "current.txt",
        "1. Unit Tests Performance:\n real 2m0.0s\n\
         2. Shared Tests Performance:\n real 0m20.0s\n\
         3. Integration Tests Performance:\n real 2m0.0s\n\
         5. All Tests Combined:\n real 4m20.0s\n",
    );

    let baseline = load_baseline(&baseline_path);
    let current = load_current(&current_path);
    let report = compare(&baseline, &current, 1.5).unwrap();

    let json_path = temp_dir.path().join("results.json");
    write_json(&json_path, &report, 1.5).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    // Summary counts must match the per-status record counts.
    let count = |status: Status| report.with_status(status).len();
    assert_eq!(value["summary"]["total_tests"], report.results.len());
    assert_eq!(value["summary"]["regressions"], count(Status::Regression));
    assert_eq!(value["summary"]["improvements"], count(Status::Improved));
    assert_eq!(value["summary"]["stable"], count(Status::Stable));
    assert_eq!(value["summary"]["new"], count(Status::New));

    assert_eq!(value["results"]["unit_tests"]["status"], "regression");
    assert_eq!(value["results"]["shared_tests"]["status"], "improved");
    assert_eq!(value["results"]["integration_tests"]["status"], "stable");
    assert_eq!(value["results"]["all_tests"]["status"], "new");
    assert_eq!(value["has_regression"], true);
}

//! # Result Rendering and Persistence
//!
//! Renders a comparison as a grouped console summary and optionally
//! serializes the structured result to a JSON file. The console text is the
//! product of this tool, so it goes to stdout directly rather than through
//! the tracing layer.

use crate::compare::{ComparisonReport, MetricComparison, Status};
use crate::error::CheckError;
use crate::metrics::MetricKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Format seconds as human-readable time.
///
/// Durations under a minute render as `12.3s`, longer ones as `2m3.4s`.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.1}s")
    } else {
        let minutes = (seconds / 60.0).floor() as u64;
        let secs = seconds % 60.0;
        format!("{minutes}m{secs:.1}s")
    }
}

fn regression_line(key: MetricKey, record: &MetricComparison) -> String {
    let ratio = record.ratio.unwrap_or(f64::INFINITY);
    let ratio_str = if ratio < 10.0 {
        format!("{:.1}%", ratio * 100.0)
    } else {
        ">10x".to_string()
    };
    format!(
        "  ❌ {}: {} (was {}) - {} slower",
        key,
        format_duration(record.current),
        format_duration(record.baseline.unwrap_or_default()),
        ratio_str
    )
}

fn improvement_line(key: MetricKey, record: &MetricComparison) -> String {
    let improvement = (1.0 - record.ratio.unwrap_or(1.0)) * 100.0;
    format!(
        "  🚀 {}: {} (was {}) - {:.1}% faster",
        key,
        format_duration(record.current),
        format_duration(record.baseline.unwrap_or_default()),
        improvement
    )
}

fn stable_line(key: MetricKey, record: &MetricComparison) -> String {
    let change = (record.ratio.unwrap_or(1.0) - 1.0) * 100.0;
    let change_str = if change.abs() > 0.1 {
        format!("{change:+.1}%")
    } else {
        "±0%".to_string()
    };
    format!(
        "  ✓ {}: {} (was {}) {}",
        key,
        format_duration(record.current),
        format_duration(record.baseline.unwrap_or_default()),
        change_str
    )
}

/// Print the grouped analysis summary to stdout.
///
/// Buckets appear in severity order (regressions, improvements, stable,
/// new) and only when non-empty; records keep canonical key order within
/// each bucket.
pub fn print_report(report: &ComparisonReport, threshold: f64) {
    println!("\n=== Performance Regression Analysis ===");
    println!(
        "Regression threshold: {:.1}% slower than baseline\n",
        threshold * 100.0
    );

    let regressions = report.with_status(Status::Regression);
    if !regressions.is_empty() {
        println!("🚨 PERFORMANCE REGRESSIONS DETECTED:");
        for (key, record) in regressions {
            println!("{}", regression_line(key, record));
        }
        println!();
    }

    let improvements = report.with_status(Status::Improved);
    if !improvements.is_empty() {
        println!("✅ PERFORMANCE IMPROVEMENTS:");
        for (key, record) in improvements {
            println!("{}", improvement_line(key, record));
        }
        println!();
    }

    let stable = report.with_status(Status::Stable);
    if !stable.is_empty() {
        println!("📊 STABLE PERFORMANCE:");
        for (key, record) in stable {
            println!("{}", stable_line(key, record));
        }
        println!();
    }

    let new_tests = report.with_status(Status::New);
    if !new_tests.is_empty() {
        println!("🆕 NEW TESTS:");
        for (key, record) in new_tests {
            println!("  + {}: {}", key, format_duration(record.current));
        }
        println!();
    }
}

/// Per-status record counts included in the JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total_tests: usize,
    pub regressions: usize,
    pub improvements: usize,
    pub stable: usize,
    pub new: usize,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    threshold: f64,
    has_regression: bool,
    results: &'a BTreeMap<MetricKey, MetricComparison>,
    summary: StatusSummary,
}

fn summarize(report: &ComparisonReport) -> StatusSummary {
    let count = |status| report.with_status(status).len();
    StatusSummary {
        total_tests: report.results.len(),
        regressions: count(Status::Regression),
        improvements: count(Status::Improved),
        stable: count(Status::Stable),
        new: count(Status::New),
    }
}

/// Serialize the comparison result to a JSON file.
///
/// Non-finite ratios serialize as JSON `null`; the `status` field already
/// carries the regression verdict for those records.
pub fn write_json(
    path: &Path,
    report: &ComparisonReport,
    threshold: f64,
) -> Result<(), CheckError> {
    let payload = JsonReport {
        threshold,
        has_regression: report.has_regression,
        results: &report.results,
        summary: summarize(report),
    };

    let content = serde_json::to_string_pretty(&payload)?;
    fs::write(path, content)?;
    println!("Detailed results saved to {}", path.display());

    Ok(())
}

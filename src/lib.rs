//! # perfcheck
//!
//! CI-time performance regression checker for test-suite timing reports.
//! Compares a current report against a stored baseline and flags metrics
//! that slowed down beyond a configurable threshold.
//!
//! The pipeline is strictly linear: extract timings from both reports,
//! join them by metric key, classify each metric, then render a grouped
//! summary (and optionally persist it as JSON). Each run is stateless.
//!
//! ## Usage
//!
//! ```rust
//! use perfcheck::{compare, parse_report, Status, MetricKey};
//!
//! let baseline = parse_report("1. Unit Tests Performance:\n real 1m0.0s");
//! let current = parse_report("1. Unit Tests Performance:\n real 1m31.0s");
//!
//! let report = compare(&baseline, &current, 1.5).unwrap();
//! assert!(report.has_regression);
//! assert_eq!(report.results[&MetricKey::UnitTests].status, Status::Regression);
//! ```

/// Ratio computation and status classification
pub mod compare;
/// Error types
pub mod error;
/// Report loading with degrade-to-empty semantics
pub mod loader;
/// Metric key set and snapshot extraction
pub mod metrics;
/// Console rendering and JSON persistence
pub mod report;

pub use compare::{ComparisonReport, MetricComparison, Status, compare};
pub use error::CheckError;
pub use loader::{load_baseline, load_current};
pub use metrics::{MetricKey, TimingSnapshot, parse_report};
pub use report::{StatusSummary, format_duration, print_report, write_json};

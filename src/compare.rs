//! # Regression Comparison
//!
//! Joins baseline and current snapshots by metric key, computes a speed
//! ratio per key, and classifies each metric into one of four statuses.

use crate::error::CheckError;
use crate::metrics::{MetricKey, TimingSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of one metric relative to its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    New,
    Improved,
    Stable,
    Regression,
}

/// Comparison outcome for a single metric key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricComparison {
    pub status: Status,
    /// Current duration in seconds.
    pub current: f64,
    /// Baseline duration in seconds. `None` iff the metric is new.
    pub baseline: Option<f64>,
    /// current / baseline. `None` iff the metric is new; infinite when the
    /// baseline duration is zero.
    pub ratio: Option<f64>,
}

/// Full result of comparing a current snapshot against a baseline.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub has_regression: bool,
    pub results: BTreeMap<MetricKey, MetricComparison>,
}

impl ComparisonReport {
    /// Build a report treating every current metric as new.
    ///
    /// Used on first runs, when no baseline has been recorded yet.
    pub fn from_new(current: &TimingSnapshot) -> Self {
        let results = current
            .iter()
            .map(|(&key, &secs)| {
                let record = MetricComparison {
                    status: Status::New,
                    current: secs,
                    baseline: None,
                    ratio: None,
                };
                (key, record)
            })
            .collect();

        Self {
            has_regression: false,
            results,
        }
    }

    /// Records with the given status, in canonical key order.
    pub fn with_status(&self, status: Status) -> Vec<(MetricKey, &MetricComparison)> {
        self.results
            .iter()
            .filter(|(_, record)| record.status == status)
            .map(|(&key, record)| (key, record))
            .collect()
    }
}

/// Compare current metrics against the baseline.
///
/// For each key present in the current snapshot: a key absent from the
/// baseline is `new`; otherwise ratio = current / baseline (infinite when
/// the baseline is zero), classified as `improved` when ratio < 1.0 and
/// `stable` otherwise, overridden to `regression` when ratio is strictly
/// greater than `threshold`. A ratio exactly equal to the threshold is not
/// a regression. Keys present only in the baseline are ignored.
pub fn compare(
    baseline: &TimingSnapshot,
    current: &TimingSnapshot,
    threshold: f64,
) -> Result<ComparisonReport, CheckError> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(CheckError::InvalidThreshold(format!(
            "threshold must be a positive finite number, got {threshold}"
        )));
    }

    let mut results = BTreeMap::new();
    let mut has_regression = false;

    for (&key, &current_secs) in current {
        let record = match baseline.get(&key) {
            None => MetricComparison {
                status: Status::New,
                current: current_secs,
                baseline: None,
                ratio: None,
            },
            Some(&baseline_secs) => {
                // A zero baseline makes any measured time an infinite
                // slowdown, which always exceeds the threshold.
                let ratio = if baseline_secs > 0.0 {
                    current_secs / baseline_secs
                } else {
                    f64::INFINITY
                };

                let mut status = if ratio < 1.0 {
                    Status::Improved
                } else {
                    Status::Stable
                };
                if ratio > threshold {
                    status = Status::Regression;
                    has_regression = true;
                }

                MetricComparison {
                    status,
                    current: current_secs,
                    baseline: Some(baseline_secs),
                    ratio: Some(ratio),
                }
            }
        };
        results.insert(key, record);
    }

    Ok(ComparisonReport {
        has_regression,
        results,
    })
}

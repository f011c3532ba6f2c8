//! # Performance Report Extraction
//!
//! Parses free-form test-suite timing output and extracts per-category
//! durations. Each metric key has its own independent pattern, so a report
//! missing one category still yields measurements for the others.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Timing categories tracked in a performance report.
///
/// The set is closed. Declaration order matches the ordinal labels in the
/// report (`1.` through `5.`) and is the canonical iteration order for
/// snapshots and comparison results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    UnitTests,
    SharedTests,
    IntegrationTests,
    E2eTests,
    AllTests,
}

impl MetricKey {
    /// All metric keys in canonical order.
    pub const ALL: [MetricKey; 5] = [
        MetricKey::UnitTests,
        MetricKey::SharedTests,
        MetricKey::IntegrationTests,
        MetricKey::E2eTests,
        MetricKey::AllTests,
    ];

    /// Identifier used in console output and JSON results.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::UnitTests => "unit_tests",
            MetricKey::SharedTests => "shared_tests",
            MetricKey::IntegrationTests => "integration_tests",
            MetricKey::E2eTests => "e2e_tests",
            MetricKey::AllTests => "all_tests",
        }
    }

    /// Regex fragment matching this key's labeled line in a report.
    fn label_pattern(self) -> &'static str {
        match self {
            MetricKey::UnitTests => r"1\. Unit Tests Performance:",
            MetricKey::SharedTests => r"2\. Shared Tests Performance:",
            MetricKey::IntegrationTests => r"3\. Integration Tests Performance:",
            MetricKey::E2eTests => r"4\. E2E Tests Performance:",
            MetricKey::AllTests => r"5\. All Tests Combined:",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from metric key to a duration in seconds.
///
/// An absent key means the report contained no measurement for that
/// category. Absence is a valid state, never substituted with zero.
pub type TimingSnapshot = BTreeMap<MetricKey, f64>;

static PATTERNS: Lazy<Vec<(MetricKey, Regex)>> = Lazy::new(|| {
    MetricKey::ALL
        .iter()
        .map(|&key| {
            let pattern = format!(r"{}\s*real\s+(\d+)m([\d.]+)s", key.label_pattern());
            let regex = Regex::new(&pattern).expect("timing patterns are valid regexes");
            (key, regex)
        })
        .collect()
});

/// Extract timing measurements from raw report text.
///
/// Searches for each labeled `real <minutes>m<seconds>s` line independently,
/// so overlapping or out-of-order sections do not interfere with each other.
/// Keys without a matching line are omitted from the snapshot.
pub fn parse_report(text: &str) -> TimingSnapshot {
    let mut snapshot = TimingSnapshot::new();

    for (key, pattern) in PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text)
            && let Ok(minutes) = caps[1].parse::<f64>()
            && let Ok(seconds) = caps[2].parse::<f64>()
        {
            snapshot.insert(*key, minutes * 60.0 + seconds);
        }
    }

    snapshot
}

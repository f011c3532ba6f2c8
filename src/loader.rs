//! # Report Loading
//!
//! Wraps [`parse_report`] with file I/O and error tolerance. Loading never
//! aborts the program: a missing baseline is an expected first-run
//! condition, and any other read failure degrades to an empty snapshot.
//! The caller decides whether an empty snapshot is fatal.

use crate::metrics::{TimingSnapshot, parse_report};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load baseline metrics from a report file.
///
/// A missing file is a soft warning (first run, no baseline recorded yet).
/// Any other read failure is logged and also yields an empty snapshot.
pub fn load_baseline(path: &Path) -> TimingSnapshot {
    match fs::read_to_string(path) {
        Ok(content) => parse_report(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Baseline file not found");
            TimingSnapshot::new()
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load baseline");
            TimingSnapshot::new()
        }
    }
}

/// Load current metrics from a report file.
///
/// Read failures are logged and yield an empty snapshot; the caller treats
/// an empty current snapshot as fatal.
pub fn load_current(path: &Path) -> TimingSnapshot {
    match fs::read_to_string(path) {
        Ok(content) => parse_report(&content),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to load current metrics");
            TimingSnapshot::new()
        }
    }
}

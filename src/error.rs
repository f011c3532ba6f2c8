//! Error types for the regression checker.

use thiserror::Error;

/// Errors that can occur while comparing or persisting results.
///
/// Report loading never surfaces an error; unreadable inputs degrade to an
/// empty snapshot instead (see [`crate::loader`]).
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

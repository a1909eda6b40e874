//! Error types for the trove crates.
//!
//! Reads, writes and comparisons never fail; only the construction paths
//! that turn outside input into a sequence can.

use thiserror::Error;

/// Errors that can occur when building or serializing a collection.
#[derive(Debug, Error)]
pub enum TroveError {
    /// Input text was not valid JSON, or a value could not be serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value was expected to be an array.
    #[error("expected an array, got {kind}")]
    NotASequence { kind: &'static str },
}

/// Result type for trove operations.
pub type Result<T> = std::result::Result<T, TroveError>;

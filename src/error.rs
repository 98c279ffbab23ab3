//! Custom error types for node-balance
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ExportKind;

/// The main error type for node-balance operations
#[derive(Error, Debug)]
pub enum BalanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A row (or the header) of an export could not be turned into a record
    #[error("Malformed record in {kind} export at row {row}: {reason}")]
    MalformedRecord {
        kind: ExportKind,
        row: usize,
        reason: String,
    },

    /// The export tool failed or its output could not be obtained
    #[error("External call failed: {0}")]
    ExternalCall(String),

    /// The report was built but could not be transmitted
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl BalanceError {
    /// Create a malformed record error for a given export and row
    pub fn malformed(kind: ExportKind, row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            kind,
            row,
            reason: reason.into(),
        }
    }

    /// Check if this is a malformed record error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for BalanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BalanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for node-balance operations
pub type BalanceResult<T> = Result<T, BalanceError>;

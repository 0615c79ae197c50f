//! # Error Types
//!
//! This module defines error types used throughout the thermal-serial library.
//!
//! Out-of-range command parameters are deliberately NOT errors: they are
//! reported as [`Outcome::Rejected`](crate::printer::Outcome::Rejected) and
//! nothing reaches the wire.

use thiserror::Error;

/// Main error type for thermal-serial operations
#[derive(Debug, Error)]
pub enum PrinterError {
    /// Transport-level errors (open, configure, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed job script
    #[error("Job error: {0}")]
    Job(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PrinterError {
    fn from(e: serde_json::Error) -> Self {
        PrinterError::Job(e.to_string())
    }
}

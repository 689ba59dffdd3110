//! Error types for the terminal core.
//!
//! User input mistakes are never errors here: command handlers answer them
//! with warning lines. What remains are the failures a host collaborator
//! can report:
//!
//! - [`HistoryError`] - command history persistence
//! - [`ThemeError`] - theme name lookup

use std::error::Error as _;

use thiserror::Error;

/// Command history persistence errors.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Durable storage is not available (e.g. localStorage disabled).
    #[error("history storage not available")]
    StorageUnavailable,
    /// The stored payload is not a JSON list of strings.
    #[error("malformed history payload")]
    Malformed(#[source] serde_json::Error),
    /// The in-memory history could not be serialized.
    #[error("failed to serialize history")]
    Serialize(#[source] serde_json::Error),
    /// The storage backend rejected the write.
    #[error("failed to write history: {0}")]
    WriteFailed(String),
}

impl HistoryError {
    /// The error and its causes on one line, for log output.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }
}

/// Theme lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The name is not part of the closed theme set.
    #[error("unknown theme: {0}")]
    Unknown(String),
}

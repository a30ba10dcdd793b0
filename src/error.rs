// src/error.rs

use std::fmt;

/// Global application error enum.
/// Centralizes error handling for the provisioning pipeline.
#[derive(Debug)]
pub enum SetupError {
    /// Structurally invalid question bank input. Fatal: no partial bank is usable.
    MalformedQuestion(String),

    /// A store operation failed or the store returned no identity.
    /// Fatal on read paths; per-record insert failures are caught at the
    /// call site and folded into a report instead of propagating.
    Store(String),

    /// The input artifact could not be read.
    Io(std::io::Error),

    /// The input artifact could not be parsed as JSON.
    Json(serde_json::Error),

    /// Anything else (credential hashing, misconfigured seed data).
    Internal(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MalformedQuestion(msg) => write!(f, "malformed question: {}", msg),
            SetupError::Store(msg) => write!(f, "store error: {}", msg),
            SetupError::Io(err) => write!(f, "io error: {}", err),
            SetupError::Json(err) => write!(f, "json error: {}", err),
            SetupError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Io(err) => Some(err),
            SetupError::Json(err) => Some(err),
            _ => None,
        }
    }
}

/// Converts `sqlx::Error` into `SetupError::Store`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for SetupError {
    fn from(err: sqlx::Error) -> Self {
        SetupError::Store(err.to_string())
    }
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::Io(err)
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::Json(err)
    }
}

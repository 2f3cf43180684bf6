//! Error types for envaudit operations.
//!
//! This module defines [`AuditError`], the error type produced by probes,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes return `AuditError` so the failure reason can be logged
//! - The auditor never propagates these: every error becomes an advisory
//!   or a debug log line

use thiserror::Error;

/// Core error type for envaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// No Python interpreter could be found on PATH.
    #[error("No Python interpreter found on PATH")]
    InterpreterNotFound,

    /// The interpreter could not be started.
    #[error("Failed to run interpreter '{interpreter}': {source}")]
    InterpreterSpawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    /// The module is not importable.
    #[error("Module not installed: {module}")]
    ModuleNotFound { module: String },

    /// The module exists but importing it failed for another reason.
    #[error("Failed to load module '{module}': {message}")]
    ModuleLoadFailed { module: String, message: String },
}

/// Result type alias for envaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

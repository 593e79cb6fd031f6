//! Autofix errors.

use super::error_code::{self, GuardErrorCode};

/// Errors raised while writing a corrected artifact back to disk.
#[derive(Debug, thiserror::Error)]
pub enum RemediationError {
    #[error("Cannot read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Cannot rewrite {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },
}

impl GuardErrorCode for RemediationError {
    fn error_code(&self) -> &'static str {
        error_code::REMEDIATION_FAILED
    }
}

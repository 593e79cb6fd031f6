//! Check-local errors.

use super::error_code::{self, GuardErrorCode};

/// Errors a single check can hit while reading its artifact.
///
/// `ArtifactMissing` is turned into an ordinary failed result by the checks
/// that require their artifact; the other variants surface as an errored
/// result for that check only.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Artifact not found: {path}")]
    ArtifactMissing { path: String },

    #[error("Malformed input in {path}: {message}")]
    ArtifactMalformed { path: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl GuardErrorCode for CheckError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactMissing { .. } => error_code::ARTIFACT_MISSING,
            Self::ArtifactMalformed { .. } => error_code::ARTIFACT_MALFORMED,
            Self::Io { .. } => error_code::ARTIFACT_IO,
        }
    }
}

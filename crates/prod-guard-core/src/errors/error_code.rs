//! Stable error codes shared by logs and machine-readable reports.

/// Every error enum implements this to expose a stable code string.
pub trait GuardErrorCode {
    /// Returns the error code (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ARTIFACT_MISSING: &str = "ARTIFACT_MISSING";
pub const ARTIFACT_MALFORMED: &str = "ARTIFACT_MALFORMED";
pub const ARTIFACT_IO: &str = "ARTIFACT_IO";
pub const REMEDIATION_FAILED: &str = "REMEDIATION_FAILED";
pub const CHECK_PANICKED: &str = "CHECK_PANICKED";

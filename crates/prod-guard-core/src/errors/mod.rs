//! Error handling for prod-guard.
//! One error enum per subsystem, `thiserror` only.

pub mod check_error;
pub mod config_error;
pub mod error_code;
pub mod remediation_error;

pub use check_error::CheckError;
pub use config_error::ConfigError;
pub use error_code::GuardErrorCode;
pub use remediation_error::RemediationError;

//! Autofix: in-place remediation of fixable failures.

pub mod engine;
pub mod remediation;

pub use engine::{AutofixEngine, AutofixReport, FixFailure, FixRecord};
pub use remediation::Remediation;

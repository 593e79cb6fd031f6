//! prod-guard analysis: policy checks, orchestration, autofix, and reporting.

pub mod enforcement;
pub mod runner;

pub use runner::{GuardRunner, RunOptions, RunOutcome};

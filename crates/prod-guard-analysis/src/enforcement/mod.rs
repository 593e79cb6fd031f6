//! Enforcement pipeline: policy → checks → autofix → reporters.

pub mod autofix;
pub mod checks;
pub mod policy;
pub mod reporters;

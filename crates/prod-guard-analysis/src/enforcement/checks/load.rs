//! Load: did the last load test stay within the p95 latency ceiling?

use std::path::PathBuf;

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::CheckError;

use super::artifact::{self, display_number};
use super::types::*;
use crate::enforcement::policy::Policy;

pub const FIELD: &str = "p95LatencyMs";

/// No load-test result means nothing to gate on yet, so absence passes.
/// A latency regression is not mechanically fixable.
pub struct LoadCheck {
    results: PathBuf,
}

impl LoadCheck {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            results: paths.load_results.clone(),
        }
    }
}

impl Check for LoadCheck {
    fn id(&self) -> CheckId {
        CheckId::Load
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn run(&self, policy: &Policy) -> Result<CheckResult, CheckError> {
        let Some(results) = artifact::read_optional(&self.results)? else {
            return Ok(CheckResult::pass(self.id(), "no load-test result recorded"));
        };

        let p95 = artifact::number_field(&results, FIELD)
            .ok_or_else(|| artifact::malformed(&self.results, format!("missing numeric {FIELD}")))?;

        match policy.load_p95_ceiling() {
            Some(ceiling) if p95 > ceiling => Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!(
                    "p95 latency {}ms exceeds policy ceiling {}ms",
                    display_number(p95),
                    display_number(ceiling)
                ),
            )),
            Some(ceiling) => Ok(CheckResult::pass(
                self.id(),
                format!(
                    "p95 latency {}ms within ceiling {}ms",
                    display_number(p95),
                    display_number(ceiling)
                ),
            )),
            None => Ok(CheckResult::pass(
                self.id(),
                format!("p95 latency {}ms (no policy ceiling)", display_number(p95)),
            )),
        }
    }
}

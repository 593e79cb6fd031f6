//! Check orchestrator: runs every check in registration order.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::error_code::CHECK_PANICKED;
use prod_guard_core::errors::GuardErrorCode;

use super::types::*;
use super::{CorsCheck, LoadCheck, NetworkCheck, RateLimitCheck, SecurityCheck};
use crate::enforcement::policy::Policy;

/// Runs all registered checks without short-circuiting.
///
/// A check that returns an error or panics becomes an errored result for
/// that check alone; the remaining checks still run.
pub struct CheckOrchestrator {
    checks: Vec<Box<dyn Check>>,
}

impl CheckOrchestrator {
    /// Create an orchestrator with the five default checks:
    /// CORS, Rate Limit, Network, Load, Security.
    pub fn new(paths: &ArtifactPaths) -> Self {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(CorsCheck::new(paths)),
            Box::new(RateLimitCheck::new(paths)),
            Box::new(NetworkCheck::new(paths)),
            Box::new(LoadCheck::new(paths)),
            Box::new(SecurityCheck::new(paths)),
        ];
        Self { checks }
    }

    /// Create an orchestrator with custom checks.
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    pub fn check_ids(&self) -> Vec<CheckId> {
        self.checks.iter().map(|c| c.id()).collect()
    }

    /// Execute every check, returning one result per check in order.
    pub fn execute(&self, policy: &Policy) -> Vec<CheckResult> {
        self.checks
            .iter()
            .map(|check| Self::run_isolated(check.as_ref(), policy))
            .collect()
    }

    /// Execute every check and keep only the failures.
    pub fn analyze(&self, policy: &Policy) -> FailureSet {
        FailureSet::from_results(&self.execute(policy))
    }

    fn run_isolated(check: &dyn Check, policy: &Policy) -> CheckResult {
        let start = Instant::now();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(policy)));

        let mut result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(error)) => {
                tracing::warn!(
                    check = %check.id(),
                    error = %error.coded_string(),
                    "check could not run"
                );
                CheckResult::errored(check.id(), check.severity(), error.error_code(), error)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(check = %check.id(), %message, "check panicked");
                CheckResult::errored(
                    check.id(),
                    check.severity(),
                    CHECK_PANICKED,
                    format!("check panicked: {message}"),
                )
            }
        };
        result.execution_time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            check = %check.id(),
            status = ?result.status(),
            fixable = result.is_fixable(),
            elapsed_ms = result.execution_time_ms,
            "check finished"
        );
        result
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

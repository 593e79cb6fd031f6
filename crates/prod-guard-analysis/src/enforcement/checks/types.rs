//! Core types for policy checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use prod_guard_core::errors::CheckError;

use crate::enforcement::autofix::Remediation;
use crate::enforcement::policy::Policy;

/// The five shipped check identifiers, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    Cors,
    RateLimit,
    Network,
    Load,
    Security,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cors => "cors",
            Self::RateLimit => "rate-limit",
            Self::Network => "network",
            Self::Load => "load",
            Self::Security => "security",
        }
    }

    /// Human-readable name used by reporters.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cors => "CORS",
            Self::RateLimit => "Rate Limit",
            Self::Network => "Network",
            Self::Load => "Load",
            Self::Security => "Security",
        }
    }

    pub fn all() -> &'static [CheckId] {
        &[
            Self::Cors,
            Self::RateLimit,
            Self::Network,
            Self::Load,
            Self::Security,
        ]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a failing check. Reporting only, never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    /// The check could not evaluate its artifact.
    Errored,
}

/// Outcome of one check execution.
///
/// Fields are private so a passed result can never carry a severity,
/// remediation, or error code.
#[derive(Debug, Clone)]
pub struct CheckResult {
    check_id: CheckId,
    status: CheckStatus,
    severity: Option<Severity>,
    summary: String,
    remediation: Option<Remediation>,
    error_code: Option<&'static str>,
    pub execution_time_ms: u64,
}

impl CheckResult {
    pub fn pass(check_id: CheckId, summary: impl Into<String>) -> Self {
        Self {
            check_id,
            status: CheckStatus::Passed,
            severity: None,
            summary: summary.into(),
            remediation: None,
            error_code: None,
            execution_time_ms: 0,
        }
    }

    pub fn fail(check_id: CheckId, severity: Severity, summary: impl Into<String>) -> Self {
        Self {
            check_id,
            status: CheckStatus::Failed,
            severity: Some(severity),
            summary: summary.into(),
            remediation: None,
            error_code: None,
            execution_time_ms: 0,
        }
    }

    /// A check that could not run. Never fixable.
    pub fn errored(
        check_id: CheckId,
        severity: Severity,
        error_code: &'static str,
        error: impl fmt::Display,
    ) -> Self {
        Self {
            check_id,
            status: CheckStatus::Errored,
            severity: Some(severity),
            summary: format!("could not run: {error}"),
            remediation: None,
            error_code: Some(error_code),
            execution_time_ms: 0,
        }
    }

    /// Attach a remediation to a failed result. Ignored on any other status.
    pub fn with_remediation(mut self, remediation: Remediation) -> Self {
        if self.status == CheckStatus::Failed {
            self.remediation = Some(remediation);
        }
        self
    }

    /// Attach a remediation when one is available.
    pub fn with_optional_remediation(self, remediation: Option<Remediation>) -> Self {
        match remediation {
            Some(r) => self.with_remediation(r),
            None => self,
        }
    }

    pub fn check_id(&self) -> CheckId {
        self.check_id
    }

    pub fn name(&self) -> &'static str {
        self.check_id.name()
    }

    pub fn status(&self) -> CheckStatus {
        self.status
    }

    pub fn ok(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn remediation(&self) -> Option<&Remediation> {
        self.remediation.as_ref()
    }

    pub fn is_fixable(&self) -> bool {
        self.remediation.is_some()
    }

    pub fn error_code(&self) -> Option<&'static str> {
        self.error_code
    }
}

/// One independent verification unit comparing one artifact to the policy.
pub trait Check: Send + Sync {
    fn id(&self) -> CheckId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Severity reported when this check fails or errors.
    fn severity(&self) -> Severity;

    /// Evaluate the artifact. Errors are isolated by the orchestrator.
    fn run(&self, policy: &Policy) -> Result<CheckResult, CheckError>;
}

/// Every non-passed result of one run, in check execution order.
#[derive(Debug, Clone, Default)]
pub struct FailureSet {
    failures: Vec<CheckResult>,
}

impl FailureSet {
    pub fn from_results(results: &[CheckResult]) -> Self {
        Self {
            failures: results.iter().filter(|r| !r.ok()).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CheckResult> {
        self.failures.iter()
    }

    /// Failures that carry a remediation, in order.
    pub fn fixable(&self) -> impl Iterator<Item = &CheckResult> {
        self.failures.iter().filter(|r| r.is_fixable())
    }

    pub fn check_ids(&self) -> Vec<CheckId> {
        self.failures.iter().map(|r| r.check_id()).collect()
    }
}

impl<'a> IntoIterator for &'a FailureSet {
    type Item = &'a CheckResult;
    type IntoIter = std::slice::Iter<'a, CheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn remediation() -> Remediation {
        Remediation::set_field(
            CheckId::Network,
            PathBuf::from("config/http-client.json"),
            "timeoutMs",
            serde_json::json!(5000),
        )
    }

    #[test]
    fn passed_result_rejects_remediation() {
        let result = CheckResult::pass(CheckId::Network, "ok").with_remediation(remediation());
        assert!(result.ok());
        assert!(result.severity().is_none());
        assert!(!result.is_fixable());
    }

    #[test]
    fn errored_result_is_never_fixable() {
        let result = CheckResult::errored(CheckId::Network, Severity::High, "ARTIFACT_MALFORMED", "bad")
            .with_remediation(remediation());
        assert_eq!(result.status(), CheckStatus::Errored);
        assert!(!result.is_fixable());
        assert_eq!(result.summary(), "could not run: bad");
    }

    #[test]
    fn failure_set_keeps_order_and_drops_passes() {
        let results = vec![
            CheckResult::fail(CheckId::Cors, Severity::High, "missing"),
            CheckResult::pass(CheckId::RateLimit, "ok"),
            CheckResult::fail(CheckId::Network, Severity::High, "low").with_remediation(remediation()),
        ];
        let failures = FailureSet::from_results(&results);
        assert_eq!(failures.check_ids(), vec![CheckId::Cors, CheckId::Network]);
        assert_eq!(failures.fixable().count(), 1);
    }
}

//! Autofix engine: applies every attached remediation in failure order.

use prod_guard_core::errors::GuardErrorCode;
use serde::Serialize;

use crate::enforcement::checks::{CheckId, FailureSet};

/// A remediation that was written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRecord {
    pub check_id: CheckId,
    pub description: String,
}

/// A remediation that could not be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixFailure {
    pub check_id: CheckId,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutofixReport {
    pub fixed: Vec<FixRecord>,
    pub failed: Vec<FixFailure>,
}

impl AutofixReport {
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.failed.is_empty()
    }

    pub fn fixed_ids(&self) -> Vec<CheckId> {
        self.fixed.iter().map(|f| f.check_id).collect()
    }
}

/// Best-effort: one failed write is logged and recorded, the rest still run.
/// Never alters the failure set; fixes take effect on the next run.
pub struct AutofixEngine;

impl AutofixEngine {
    pub fn apply(failures: &FailureSet) -> AutofixReport {
        let mut report = AutofixReport::default();

        for failure in failures.fixable() {
            let Some(remediation) = failure.remediation() else {
                continue;
            };
            match remediation.apply() {
                Ok(()) => {
                    tracing::info!(
                        check = %failure.check_id(),
                        path = %remediation.path().display(),
                        "autofix applied"
                    );
                    report.fixed.push(FixRecord {
                        check_id: failure.check_id(),
                        description: remediation.describe(),
                    });
                }
                Err(error) => {
                    tracing::warn!(
                        check = %failure.check_id(),
                        error = %error.coded_string(),
                        "autofix failed"
                    );
                    report.failed.push(FixFailure {
                        check_id: failure.check_id(),
                        error: error.to_string(),
                    });
                }
            }
        }

        report
    }
}

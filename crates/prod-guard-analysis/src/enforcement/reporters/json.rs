//! JSON reporter: machine-readable run document.

use serde::Serialize;

use super::{Reporter, RunSummary};
use crate::enforcement::autofix::AutofixReport;
use crate::enforcement::checks::{CheckId, CheckStatus, Severity};

pub struct JsonReporter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    passed: bool,
    dry_run: bool,
    checks: Vec<JsonCheck<'a>>,
    failures: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autofix: Option<&'a AutofixReport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCheck<'a> {
    id: CheckId,
    name: &'static str,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
    summary: &'a str,
    fixable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    execution_time_ms: u64,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, summary: &RunSummary<'_>) -> Result<String, String> {
        let report = JsonReport {
            passed: summary.passed(),
            dry_run: summary.dry_run,
            checks: summary
                .results
                .iter()
                .map(|r| JsonCheck {
                    id: r.check_id(),
                    name: r.name(),
                    status: r.status(),
                    severity: r.severity(),
                    summary: r.summary(),
                    fixable: r.is_fixable(),
                    error_code: r.error_code(),
                    execution_time_ms: r.execution_time_ms,
                })
                .collect(),
            failures: summary.failures.iter().map(|f| f.name()).collect(),
            autofix: summary.autofix,
        };
        serde_json::to_string_pretty(&report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| format!("JSON serialization failed: {e}"))
    }
}

//! Security: does the latest scan report contain alerts at a blocked risk level?

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::CheckError;
use serde_json::Value;

use super::artifact;
use super::types::*;
use crate::enforcement::policy::Policy;

/// No scan report means nothing to gate on yet, so absence passes.
///
/// Accepts both `{ "alerts": [...] }` and the ZAP baseline layout
/// `{ "site": [{ "alerts": [...] }] }`.
pub struct SecurityCheck {
    report: PathBuf,
}

impl SecurityCheck {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            report: paths.security_report.clone(),
        }
    }
}

/// Flatten every alert in the report.
fn collect_alerts<'a>(report: &'a Value, path: &Path) -> Result<Vec<&'a Value>, CheckError> {
    let mut alerts = Vec::new();
    if let Some(top) = report.get("alerts") {
        let list = top
            .as_array()
            .ok_or_else(|| artifact::malformed(path, "alerts is not an array"))?;
        alerts.extend(list.iter());
    }
    if let Some(sites) = report.get("site") {
        let sites = sites
            .as_array()
            .ok_or_else(|| artifact::malformed(path, "site is not an array"))?;
        for site in sites {
            if let Some(list) = site.get("alerts") {
                let list = list
                    .as_array()
                    .ok_or_else(|| artifact::malformed(path, "site alerts is not an array"))?;
                alerts.extend(list.iter());
            }
        }
    }
    Ok(alerts)
}

impl Check for SecurityCheck {
    fn id(&self) -> CheckId {
        CheckId::Security
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn run(&self, policy: &Policy) -> Result<CheckResult, CheckError> {
        let Some(report) = artifact::read_optional(&self.report)? else {
            return Ok(CheckResult::pass(self.id(), "no security report recorded"));
        };

        let alerts = collect_alerts(&report, &self.report)?;
        if !policy.has_security_block_list() {
            return Ok(CheckResult::pass(
                self.id(),
                format!("{} alerts (no blocked risk levels)", alerts.len()),
            ));
        }

        // risk level -> count, sorted for stable output
        let mut blocked: BTreeMap<String, usize> = BTreeMap::new();
        for alert in &alerts {
            let Some(risk) = alert.get("risk").and_then(Value::as_str) else {
                continue;
            };
            if policy.blocks_risk(risk) {
                *blocked.entry(risk.trim().to_string()).or_default() += 1;
            }
        }

        if blocked.is_empty() {
            return Ok(CheckResult::pass(
                self.id(),
                format!("{} alerts, none at a blocked risk level", alerts.len()),
            ));
        }

        let total: usize = blocked.values().sum();
        let breakdown = blocked
            .iter()
            .map(|(risk, count)| format!("{count} {risk}"))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(CheckResult::fail(
            self.id(),
            self.severity(),
            format!("{total} blocked alerts ({breakdown})"),
        ))
    }
}

//! Network: is the HTTP client timeout at or above the policy minimum?

use std::path::PathBuf;

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::CheckError;

use super::artifact::{self, display_number};
use super::types::*;
use crate::enforcement::autofix::Remediation;
use crate::enforcement::policy::Policy;

pub const FIELD: &str = "timeoutMs";

/// Fails when the HTTP client config is missing, when `timeoutMs` is not set,
/// or when it is below `network.timeout_ms.min`. Fixable (raise to the
/// minimum) whenever the config exists and a minimum is configured.
pub struct NetworkCheck {
    config: PathBuf,
}

impl NetworkCheck {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            config: paths.network_config.clone(),
        }
    }

    fn remediation(&self, min: Option<f64>) -> Option<Remediation> {
        min.map(|min| {
            Remediation::set_field(
                CheckId::Network,
                self.config.clone(),
                FIELD,
                artifact::number_value(min),
            )
        })
    }
}

impl Check for NetworkCheck {
    fn id(&self) -> CheckId {
        CheckId::Network
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn run(&self, policy: &Policy) -> Result<CheckResult, CheckError> {
        let config = match artifact::read_required(&self.config) {
            Ok(doc) => doc,
            Err(CheckError::ArtifactMissing { path }) => {
                return Ok(CheckResult::fail(
                    self.id(),
                    self.severity(),
                    format!("network config {path} not found"),
                ));
            }
            Err(e) => return Err(e),
        };
        let min = policy.network_timeout_min();

        let Some(timeout) = artifact::number_field(&config, FIELD) else {
            return Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!("{FIELD} is not set in {}", self.config.display()),
            )
            .with_optional_remediation(self.remediation(min)));
        };

        match min {
            Some(min) if timeout < min => Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!(
                    "{FIELD} {} is below policy minimum {}",
                    display_number(timeout),
                    display_number(min)
                ),
            )
            .with_optional_remediation(self.remediation(Some(min)))),
            Some(min) => Ok(CheckResult::pass(
                self.id(),
                format!(
                    "{FIELD} {} meets minimum {}",
                    display_number(timeout),
                    display_number(min)
                ),
            )),
            None => Ok(CheckResult::pass(
                self.id(),
                format!("{FIELD} {} (no policy minimum)", display_number(timeout)),
            )),
        }
    }
}

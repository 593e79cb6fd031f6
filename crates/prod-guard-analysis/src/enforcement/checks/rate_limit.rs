//! Rate Limit: is the configured requests-per-minute within the policy maximum?

use std::path::{Path, PathBuf};

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::CheckError;
use serde_json::Value;

use super::artifact::{self, display_number};
use super::types::*;
use crate::enforcement::autofix::Remediation;
use crate::enforcement::policy::Policy;

pub const FIELD: &str = "requestsPerMinute";

/// Key in the defaults document naming the rate-limit config.
pub const DEFAULTS_KEY: &str = "rateLimitConfig";

/// Fails when the rate-limit config is missing, when `requestsPerMinute` is
/// missing or non-positive, or when it exceeds
/// `rate_limit.requests_per_minute.max`. With a positive policy maximum,
/// failures on an existing config are fixable by writing the maximum back.
///
/// The config location is the explicitly configured path if there is one,
/// otherwise `rateLimitConfig` from the defaults document, otherwise
/// `config/rate-limit.json`.
pub struct RateLimitCheck {
    paths: ArtifactPaths,
}

impl RateLimitCheck {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }

    fn config_path(&self) -> Result<PathBuf, CheckError> {
        if self.paths.rate_limit_config_explicit {
            return Ok(self.paths.rate_limit_config.clone());
        }
        let reference = artifact::read_optional(&self.paths.defaults)?.and_then(|doc| {
            doc.get(DEFAULTS_KEY)
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        Ok(match reference {
            Some(reference) => self.paths.resolve_referenced(&reference),
            None => self.paths.rate_limit_config.clone(),
        })
    }

    fn remediation(config: &Path, max: Option<f64>) -> Option<Remediation> {
        // zero would be written back and then rejected as non-positive
        max.filter(|max| *max > 0.0).map(|max| {
            Remediation::set_field(
                CheckId::RateLimit,
                config.to_path_buf(),
                FIELD,
                artifact::number_value(max),
            )
        })
    }
}

impl Check for RateLimitCheck {
    fn id(&self) -> CheckId {
        CheckId::RateLimit
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn run(&self, policy: &Policy) -> Result<CheckResult, CheckError> {
        let config_path = self.config_path()?;
        let config = match artifact::read_required(&config_path) {
            Ok(doc) => doc,
            Err(CheckError::ArtifactMissing { path }) => {
                return Ok(CheckResult::fail(
                    self.id(),
                    self.severity(),
                    format!("rate-limit config {path} not found"),
                ));
            }
            Err(e) => return Err(e),
        };
        let max = policy.rate_limit_max();

        let rpm = match artifact::number_field(&config, FIELD) {
            Some(rpm) if rpm > 0.0 => rpm,
            Some(rpm) => {
                return Ok(CheckResult::fail(
                    self.id(),
                    self.severity(),
                    format!("{FIELD} must be positive, found {}", display_number(rpm)),
                )
                .with_optional_remediation(Self::remediation(&config_path, max)));
            }
            None => {
                return Ok(CheckResult::fail(
                    self.id(),
                    self.severity(),
                    format!("{FIELD} is not set in {}", config_path.display()),
                )
                .with_optional_remediation(Self::remediation(&config_path, max)));
            }
        };

        match max {
            Some(max) if rpm > max => Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!(
                    "{FIELD} {} exceeds policy maximum {}",
                    display_number(rpm),
                    display_number(max)
                ),
            )
            .with_optional_remediation(Self::remediation(&config_path, Some(max)))),
            Some(max) => Ok(CheckResult::pass(
                self.id(),
                format!(
                    "{FIELD} {} within maximum {}",
                    display_number(rpm),
                    display_number(max)
                ),
            )),
            None => Ok(CheckResult::pass(
                self.id(),
                format!("{FIELD} {} (no policy maximum)", display_number(rpm)),
            )),
        }
    }
}

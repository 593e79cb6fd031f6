//! CORS: is the CORS configuration referenced by the defaults document present?

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::errors::CheckError;
use serde_json::Value;

use super::artifact;
use super::types::*;
use crate::enforcement::policy::Policy;

/// Fails when the defaults document is missing, names no `corsConfig`, or
/// names a file that does not exist. Read-only, never fixable.
pub struct CorsCheck {
    paths: ArtifactPaths,
}

impl CorsCheck {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            paths: paths.clone(),
        }
    }
}

impl Check for CorsCheck {
    fn id(&self) -> CheckId {
        CheckId::Cors
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn run(&self, _policy: &Policy) -> Result<CheckResult, CheckError> {
        let defaults = match artifact::read_required(&self.paths.defaults) {
            Ok(doc) => doc,
            Err(CheckError::ArtifactMissing { path }) => {
                return Ok(CheckResult::fail(
                    self.id(),
                    self.severity(),
                    format!("defaults document {path} not found"),
                ));
            }
            Err(e) => return Err(e),
        };

        let Some(reference) = defaults.get("corsConfig").and_then(Value::as_str) else {
            return Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!("{} does not declare corsConfig", self.paths.defaults.display()),
            ));
        };

        let cors_path = self.paths.resolve_referenced(reference);
        if cors_path.is_file() {
            Ok(CheckResult::pass(
                self.id(),
                format!("CORS config present at {}", cors_path.display()),
            ))
        } else {
            Ok(CheckResult::fail(
                self.id(),
                self.severity(),
                format!("CORS config {} not found", cors_path.display()),
            ))
        }
    }
}

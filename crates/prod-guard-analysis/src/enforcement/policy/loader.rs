//! Policy loading from YAML.

use std::path::Path;

use prod_guard_core::errors::ConfigError;

use super::types::Policy;

/// Reads and parses the policy document. Failures are fatal to a run.
pub struct PolicyLoader;

impl PolicyLoader {
    pub fn load(path: &Path) -> Result<Policy, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let policy = Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })?;
        tracing::info!(
            path = %path.display(),
            allow_autofix = policy.allow_autofix(),
            "policy loaded"
        );
        Ok(policy)
    }

    /// Parse and validate a policy from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Policy, ConfigError> {
        let policy: Policy = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }
}

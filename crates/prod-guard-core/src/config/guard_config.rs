//! Top-level prod-guard configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PathsConfig;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PROD_GUARD_*`)
/// 3. Project config (`prod-guard.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    pub paths: PathsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub policy: Option<String>,
}

const ENV_OVERRIDES: [&str; 6] = [
    "PROD_GUARD_POLICY",
    "PROD_GUARD_DEFAULTS",
    "PROD_GUARD_RATE_LIMIT_CONFIG",
    "PROD_GUARD_NETWORK_CONFIG",
    "PROD_GUARD_LOAD_RESULTS",
    "PROD_GUARD_SECURITY_REPORT",
];

impl GuardConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Parse configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reject configured paths that are empty.
    pub fn validate(config: &GuardConfig) -> Result<(), ConfigError> {
        for (field, value) in config.paths.entries() {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Names of the environment variables consulted by `load`.
    pub fn env_override_keys() -> &'static [&'static str] {
        &ENV_OVERRIDES
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut GuardConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GuardConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GuardConfig, other: &GuardConfig) {
        let (base, other) = (&mut base.paths, &other.paths);
        if other.policy.is_some() {
            base.policy = other.policy.clone();
        }
        if other.defaults.is_some() {
            base.defaults = other.defaults.clone();
        }
        if other.rate_limit_config.is_some() {
            base.rate_limit_config = other.rate_limit_config.clone();
        }
        if other.network_config.is_some() {
            base.network_config = other.network_config.clone();
        }
        if other.load_results.is_some() {
            base.load_results = other.load_results.clone();
        }
        if other.security_report.is_some() {
            base.security_report = other.security_report.clone();
        }
    }

    fn apply_env_overrides(config: &mut GuardConfig) {
        let paths = &mut config.paths;
        let slots: [&mut Option<String>; 6] = [
            &mut paths.policy,
            &mut paths.defaults,
            &mut paths.rate_limit_config,
            &mut paths.network_config,
            &mut paths.load_results,
            &mut paths.security_report,
        ];
        for (key, slot) in ENV_OVERRIDES.iter().zip(slots) {
            if let Ok(val) = std::env::var(key) {
                tracing::debug!(key, value = %val, "config override from environment");
                *slot = Some(val);
            }
        }
    }

    fn apply_cli_overrides(config: &mut GuardConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.policy {
            config.paths.policy = Some(v.clone());
        }
    }
}

//! Artifact path configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DEFAULTS_PATH, DEFAULT_LOAD_RESULTS_PATH, DEFAULT_NETWORK_CONFIG_PATH,
    DEFAULT_POLICY_PATH, DEFAULT_RATE_LIMIT_CONFIG_PATH, DEFAULT_SECURITY_REPORT_PATH,
};

/// Locations of every file a run reads. Relative paths resolve against the
/// project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Policy document. Default: `prod-guard.policy.yaml`.
    pub policy: Option<String>,
    /// Defaults document carrying `corsConfig`. Default: `config/defaults.json`.
    pub defaults: Option<String>,
    /// Default: `config/rate-limit.json`.
    pub rate_limit_config: Option<String>,
    /// HTTP client config. Default: `config/http-client.json`.
    pub network_config: Option<String>,
    /// Default: `load-test/results.json`.
    pub load_results: Option<String>,
    /// Default: `security/zap-report.json`.
    pub security_report: Option<String>,
}

impl PathsConfig {
    pub fn effective_policy(&self) -> &str {
        self.policy.as_deref().unwrap_or(DEFAULT_POLICY_PATH)
    }

    pub fn effective_defaults(&self) -> &str {
        self.defaults.as_deref().unwrap_or(DEFAULT_DEFAULTS_PATH)
    }

    pub fn effective_rate_limit_config(&self) -> &str {
        self.rate_limit_config
            .as_deref()
            .unwrap_or(DEFAULT_RATE_LIMIT_CONFIG_PATH)
    }

    pub fn effective_network_config(&self) -> &str {
        self.network_config
            .as_deref()
            .unwrap_or(DEFAULT_NETWORK_CONFIG_PATH)
    }

    pub fn effective_load_results(&self) -> &str {
        self.load_results
            .as_deref()
            .unwrap_or(DEFAULT_LOAD_RESULTS_PATH)
    }

    pub fn effective_security_report(&self) -> &str {
        self.security_report
            .as_deref()
            .unwrap_or(DEFAULT_SECURITY_REPORT_PATH)
    }

    /// Pairs of (field name, configured value) for validation.
    pub(crate) fn entries(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("paths.policy", self.policy.as_deref()),
            ("paths.defaults", self.defaults.as_deref()),
            ("paths.rate_limit_config", self.rate_limit_config.as_deref()),
            ("paths.network_config", self.network_config.as_deref()),
            ("paths.load_results", self.load_results.as_deref()),
            ("paths.security_report", self.security_report.as_deref()),
        ]
    }
}

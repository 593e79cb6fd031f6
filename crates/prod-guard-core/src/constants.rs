//! Well-known file names, environment keys, and exit codes.

/// Policy document, relative to the project root.
pub const DEFAULT_POLICY_PATH: &str = "prod-guard.policy.yaml";

/// Defaults document that points at the CORS configuration.
pub const DEFAULT_DEFAULTS_PATH: &str = "config/defaults.json";

pub const DEFAULT_RATE_LIMIT_CONFIG_PATH: &str = "config/rate-limit.json";
pub const DEFAULT_NETWORK_CONFIG_PATH: &str = "config/http-client.json";
pub const DEFAULT_LOAD_RESULTS_PATH: &str = "load-test/results.json";
pub const DEFAULT_SECURITY_REPORT_PATH: &str = "security/zap-report.json";

/// Optional project config file, read from the project root.
pub const PROJECT_CONFIG_FILE: &str = "prod-guard.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "PROD_GUARD_LOG";

pub const EXIT_PASSED: i32 = 0;
pub const EXIT_GATE_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

//! Tests for the prod-guard configuration system.

use std::sync::Mutex;

use prod_guard_core::config::{ArtifactPaths, CliOverrides, GuardConfig};
use prod_guard_core::errors::{ConfigError, GuardErrorCode};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_guard_env_vars() {
    for key in GuardConfig::env_override_keys() {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_guard_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("prod-guard.toml"),
        r#"
[paths]
policy = "ops/policy.yaml"
network_config = "ops/http.json"
load_results = "ops/load.json"
"#,
    )
    .unwrap();

    std::env::set_var("PROD_GUARD_POLICY", "env/policy.yaml");
    std::env::set_var("PROD_GUARD_NETWORK_CONFIG", "env/http.json");

    let cli = CliOverrides {
        policy: Some("cli/policy.yaml".to_string()),
    };
    let config = GuardConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats env beats project
    assert_eq!(config.paths.effective_policy(), "cli/policy.yaml");
    // Env beats project
    assert_eq!(config.paths.effective_network_config(), "env/http.json");
    // Project beats defaults
    assert_eq!(config.paths.effective_load_results(), "ops/load.json");
    // Untouched fields fall back to compiled defaults
    assert_eq!(config.paths.effective_defaults(), "config/defaults.json");

    clear_guard_env_vars();
}

#[test]
fn test_missing_project_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_guard_env_vars();

    let dir = tempdir();
    let config = GuardConfig::load(dir.path(), None).unwrap();
    let paths = ArtifactPaths::resolve(dir.path(), &config);

    assert_eq!(paths.policy, dir.path().join("prod-guard.policy.yaml"));
    assert_eq!(paths.defaults, dir.path().join("config/defaults.json"));
    assert_eq!(paths.rate_limit_config, dir.path().join("config/rate-limit.json"));
    assert_eq!(paths.network_config, dir.path().join("config/http-client.json"));
    assert_eq!(paths.load_results, dir.path().join("load-test/results.json"));
    assert_eq!(paths.security_report, dir.path().join("security/zap-report.json"));
}

#[test]
fn test_malformed_project_config_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_guard_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("prod-guard.toml"), "[paths\npolicy = 1").unwrap();

    let err = GuardConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_empty_path_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_guard_env_vars();

    let dir = tempdir();
    std::env::set_var("PROD_GUARD_SECURITY_REPORT", "  ");

    let err = GuardConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "paths.security_report");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }

    clear_guard_env_vars();
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = GuardConfig::from_toml(
        r#"
[paths]
rate_limit_config = "rl.json"
future_option = true

[reporting]
color = false
"#,
    )
    .unwrap();
    assert_eq!(config.paths.effective_rate_limit_config(), "rl.json");
}

#[test]
fn test_coded_string_includes_code() {
    let err = ConfigError::FileNotFound {
        path: "prod-guard.policy.yaml".to_string(),
    };
    assert_eq!(
        err.coded_string(),
        "[CONFIG_ERROR] Config file not found: prod-guard.policy.yaml"
    );
}

use std::fs;

use prod_guard_analysis::enforcement::autofix::AutofixEngine;
use prod_guard_analysis::enforcement::checks::*;
use prod_guard_analysis::enforcement::policy::{Policy, PolicyLoader};
use prod_guard_core::config::{ArtifactPaths, GuardConfig};
use proptest::prelude::*;

fn policy(max: u64, min: u64) -> Policy {
    PolicyLoader::from_yaml(&format!(
        "rate_limit:\n  requests_per_minute:\n    max: {max}\nnetwork:\n  timeout_ms:\n    min: {min}\n"
    ))
    .unwrap()
}

fn project(rate: &str, network: &str) -> (tempfile::TempDir, ArtifactPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::resolve(dir.path(), &GuardConfig::default());
    fs::create_dir_all(paths.rate_limit_config.parent().unwrap()).unwrap();
    fs::write(&paths.rate_limit_config, rate).unwrap();
    fs::write(&paths.network_config, network).unwrap();
    (dir, paths)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rate_limit_passes_iff_positive_and_within_max(rpm in -50i64..2000, max in 1u64..1000) {
        let (_dir, paths) = project(&format!(r#"{{"requestsPerMinute": {rpm}}}"#), "{}");
        let result = RateLimitCheck::new(&paths).run(&policy(max, 0)).unwrap();
        let expected = rpm > 0 && rpm as u64 <= max;
        prop_assert_eq!(result.ok(), expected, "rpm={} max={}", rpm, max);
        prop_assert_eq!(result.is_fixable(), !expected);
    }

    #[test]
    fn network_passes_iff_at_or_above_min(timeout in 0u64..20_000, min in 0u64..10_000) {
        let (_dir, paths) = project("{}", &format!(r#"{{"timeoutMs": {timeout}}}"#));
        let result = NetworkCheck::new(&paths).run(&policy(1, min)).unwrap();
        prop_assert_eq!(result.ok(), timeout >= min, "timeout={} min={}", timeout, min);
    }

    #[test]
    fn autofix_converges_in_one_run(rpm in 101u64..100_000, timeout in 0u64..4_999) {
        let (_dir, paths) = project(
            &format!(r#"{{"requestsPerMinute": {rpm}, "window": "1m"}}"#),
            &format!(r#"{{"timeoutMs": {timeout}}}"#),
        );
        let policy = policy(100, 5000);
        let orchestrator = CheckOrchestrator::with_checks(vec![
            Box::new(RateLimitCheck::new(&paths)),
            Box::new(NetworkCheck::new(&paths)),
        ]);

        let failures = orchestrator.analyze(&policy);
        prop_assert_eq!(failures.fixable().count(), 2);
        let report = AutofixEngine::apply(&failures);
        prop_assert_eq!(report.fixed.len(), 2);

        prop_assert!(orchestrator.analyze(&policy).is_empty());
    }
}

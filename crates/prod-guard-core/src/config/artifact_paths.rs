//! Resolved, root-anchored artifact paths handed to the checks.

use std::path::{Path, PathBuf};

use super::GuardConfig;

/// Every path a run touches, resolved against the project root.
///
/// Built once from [`GuardConfig`] and injected into the checks so nothing
/// depends on the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub root: PathBuf,
    pub policy: PathBuf,
    pub defaults: PathBuf,
    pub rate_limit_config: PathBuf,
    /// True when the rate-limit path came from the CLI, environment or
    /// `prod-guard.toml`. Otherwise the defaults document may relocate it.
    pub rate_limit_config_explicit: bool,
    pub network_config: PathBuf,
    pub load_results: PathBuf,
    pub security_report: PathBuf,
}

impl ArtifactPaths {
    pub fn resolve(root: &Path, config: &GuardConfig) -> Self {
        let paths = &config.paths;
        Self {
            root: root.to_path_buf(),
            policy: anchor(root, paths.effective_policy()),
            defaults: anchor(root, paths.effective_defaults()),
            rate_limit_config: anchor(root, paths.effective_rate_limit_config()),
            rate_limit_config_explicit: paths.rate_limit_config.is_some(),
            network_config: anchor(root, paths.effective_network_config()),
            load_results: anchor(root, paths.effective_load_results()),
            security_report: anchor(root, paths.effective_security_report()),
        }
    }

    /// Resolve a path found inside an artifact (e.g. `corsConfig`).
    pub fn resolve_referenced(&self, reference: &str) -> PathBuf {
        anchor(&self.root, reference)
    }
}

fn anchor(root: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

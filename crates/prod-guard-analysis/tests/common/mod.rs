//! Shared fixture: a throwaway project tree with policy and artifacts.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use prod_guard_core::config::{ArtifactPaths, GuardConfig};

pub struct Project {
    pub dir: tempfile::TempDir,
    pub paths: ArtifactPaths,
}

impl Project {
    /// Empty project using the default artifact layout.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::resolve(dir.path(), &GuardConfig::default());
        Self { dir, paths }
    }

    /// Project where every configuration artifact exists and is compliant
    /// with [`COMPLIANT_POLICY`]; no load or security results yet.
    pub fn compliant() -> Self {
        let project = Self::new();
        project.policy(COMPLIANT_POLICY);
        project.write(
            "config/defaults.json",
            r#"{"corsConfig": "config/cors.json", "rateLimitConfig": "config/rate-limit.json"}"#,
        );
        project.write("config/cors.json", r#"{"origins": ["https://shop.example.com"]}"#);
        project.write_at(&project.paths.rate_limit_config, r#"{"requestsPerMinute": 100}"#);
        project.write_at(&project.paths.network_config, r#"{"timeoutMs": 5000}"#);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn policy(&self, yaml: &str) {
        self.write_at(&self.paths.policy, yaml);
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        self.write_at(&path, content);
        path
    }

    pub fn write_at(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    pub fn remove(&self, path: &Path) {
        fs::remove_file(path).unwrap();
    }
}

pub const COMPLIANT_POLICY: &str = r#"
gates:
  allow_autofix: true
rate_limit:
  requests_per_minute:
    max: 100
network:
  timeout_ms:
    min: 5000
load:
  p95_latency_ms: 800
security:
  block_on: [High]
"#;

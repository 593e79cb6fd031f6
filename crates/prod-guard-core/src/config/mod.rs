//! Configuration system for prod-guard.
//! TOML-based, 3-layer resolution: CLI > env > project > defaults.

pub mod artifact_paths;
pub mod guard_config;
pub mod paths_config;

pub use artifact_paths::ArtifactPaths;
pub use guard_config::{CliOverrides, GuardConfig};
pub use paths_config::PathsConfig;

//! Policy document: thresholds per check domain plus the autofix gate.

pub mod loader;
pub mod types;

pub use loader::PolicyLoader;
pub use types::*;

//! Reporters: output formats for a run.

pub mod console;
pub mod json;

use crate::enforcement::autofix::AutofixReport;
use crate::enforcement::checks::{CheckResult, FailureSet};

/// Everything a reporter needs to render one run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary<'a> {
    pub results: &'a [CheckResult],
    pub failures: &'a FailureSet,
    /// Present when the autofix engine ran.
    pub autofix: Option<&'a AutofixReport>,
    pub dry_run: bool,
}

impl RunSummary<'_> {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, summary: &RunSummary<'_>) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

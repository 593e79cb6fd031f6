//! Console reporter: fixed human-readable format.

use super::{Reporter, RunSummary};
use crate::enforcement::checks::Severity;

/// Console reporter for terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn color_start(&self, severity: Option<Severity>) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Some(Severity::Critical) => "\x1b[31m", // red
            Some(Severity::High) => "\x1b[33m",     // yellow
            None => "\x1b[32m",                     // green
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, summary: &RunSummary<'_>) -> Result<String, String> {
        let mut output = String::new();
        let ce = self.color_end();

        if summary.passed() {
            output.push_str(&format!(
                "{}✔ prod-guard: all {} checks passed{ce}\n",
                self.color_start(None),
                summary.results.len()
            ));
            return Ok(output);
        }

        // Fixes are announced before the banner: fixed for next time, still failed now.
        if let Some(autofix) = summary.autofix {
            for fix in &autofix.fixed {
                output.push_str(&format!(
                    "🔧 Auto-fixed {}: {} (takes effect next run)\n",
                    fix.check_id.name(),
                    fix.description
                ));
            }
            for failure in &autofix.failed {
                output.push_str(&format!(
                    "⚠ Could not auto-fix {}: {}\n",
                    failure.check_id.name(),
                    failure.error
                ));
            }
        }
        if summary.dry_run {
            for failure in summary.failures.fixable() {
                if let Some(remediation) = failure.remediation() {
                    output.push_str(&format!(
                        "(dry run) would auto-fix {}: {}\n",
                        failure.name(),
                        remediation.describe()
                    ));
                }
            }
        }

        let worst = if summary
            .failures
            .iter()
            .any(|f| f.severity() == Some(Severity::Critical))
        {
            Severity::Critical
        } else {
            Severity::High
        };
        output.push_str(&format!(
            "{}✖ prod-guard FAILED: {} of {} checks failed{ce}\n",
            self.color_start(Some(worst)),
            summary.failures.len(),
            summary.results.len()
        ));

        for failure in summary.failures {
            let severity = failure.severity();
            let label = severity.map(|s| s.as_str()).unwrap_or("UNKNOWN");
            output.push_str(&format!(
                "  - {} {}[{label}]{ce} {}\n",
                failure.name(),
                self.color_start(severity),
                failure.summary()
            ));
        }

        Ok(output)
    }
}

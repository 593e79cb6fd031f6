//! Run pipeline: policy → checks → autofix → report → outcome.

use std::io::Write;

use prod_guard_core::config::ArtifactPaths;
use prod_guard_core::constants::{EXIT_CONFIG_ERROR, EXIT_GATE_FAILED, EXIT_PASSED};
use prod_guard_core::errors::{ConfigError, GuardErrorCode};

use crate::enforcement::autofix::{AutofixEngine, AutofixReport};
use crate::enforcement::checks::{CheckOrchestrator, FailureSet};
use crate::enforcement::policy::PolicyLoader;
use crate::enforcement::reporters::{console::ConsoleReporter, Reporter, RunSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Analyze and report only; never run the autofix engine.
    pub dry_run: bool,
}

/// Terminal state of one run. Translated to an exit code only by the binary.
#[derive(Debug)]
pub enum RunOutcome {
    Passed {
        checks: usize,
    },
    GateFailed {
        failures: FailureSet,
        /// Present when the autofix engine ran.
        autofix: Option<AutofixReport>,
    },
    ConfigurationError(ConfigError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed { .. } => EXIT_PASSED,
            Self::GateFailed { .. } => EXIT_GATE_FAILED,
            Self::ConfigurationError(_) => EXIT_CONFIG_ERROR,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

pub struct GuardRunner {
    paths: ArtifactPaths,
    options: RunOptions,
    orchestrator: CheckOrchestrator,
    reporter: Box<dyn Reporter>,
}

impl GuardRunner {
    /// Runner with the default checks and an uncolored console reporter.
    pub fn new(paths: ArtifactPaths, options: RunOptions) -> Self {
        Self {
            orchestrator: CheckOrchestrator::new(&paths),
            paths,
            options,
            reporter: Box::new(ConsoleReporter::new(false)),
        }
    }

    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_orchestrator(mut self, orchestrator: CheckOrchestrator) -> Self {
        self.orchestrator = orchestrator;
        self
    }

    /// Execute one run, writing the report to `out`.
    ///
    /// A configuration error writes nothing; the caller decides how to
    /// surface it.
    pub fn run(&self, out: &mut dyn Write) -> RunOutcome {
        let policy = match PolicyLoader::load(&self.paths.policy) {
            Ok(policy) => policy,
            Err(error) => {
                // the binary reports it on stderr
                tracing::debug!(error = %error.coded_string(), "cannot load policy");
                return RunOutcome::ConfigurationError(error);
            }
        };

        let results = self.orchestrator.execute(&policy);
        let failures = FailureSet::from_results(&results);
        tracing::info!(
            checks = results.len(),
            failures = failures.len(),
            fixable = failures.fixable().count(),
            "analysis complete"
        );

        let autofix = if failures.is_empty() {
            None
        } else if self.options.dry_run {
            tracing::info!("dry run: autofix skipped");
            None
        } else if !policy.allow_autofix() {
            tracing::debug!("autofix not permitted by policy gate");
            None
        } else {
            Some(AutofixEngine::apply(&failures))
        };

        let summary = RunSummary {
            results: &results,
            failures: &failures,
            autofix: autofix.as_ref(),
            dry_run: self.options.dry_run,
        };
        self.emit(&summary, out);

        if failures.is_empty() {
            RunOutcome::Passed {
                checks: results.len(),
            }
        } else {
            RunOutcome::GateFailed { failures, autofix }
        }
    }

    fn emit(&self, summary: &RunSummary<'_>, out: &mut dyn Write) {
        match self.reporter.generate(summary) {
            Ok(rendered) => {
                if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
                    tracing::warn!(reporter = self.reporter.name(), error = %e, "failed to write report");
                }
            }
            Err(e) => {
                tracing::error!(reporter = self.reporter.name(), error = %e, "failed to render report");
            }
        }
    }
}

//! prod-guard CLI: the `prod-guard` command.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{retain_known_args, Cli};
use prod_guard_analysis::enforcement::reporters::create_reporter;
use prod_guard_analysis::{GuardRunner, RunOptions, RunOutcome};
use prod_guard_core::config::{ArtifactPaths, CliOverrides, GuardConfig};
use prod_guard_core::constants::EXIT_CONFIG_ERROR;
use prod_guard_core::errors::GuardErrorCode;

fn main() -> ExitCode {
    let (args, ignored) = retain_known_args(std::env::args_os());
    let cli = Cli::parse_from(args);

    prod_guard_core::tracing::init_tracing(!cli.ci);
    for arg in &ignored {
        tracing::debug!(arg = %arg.to_string_lossy(), "ignoring unrecognized argument");
    }

    let overrides = CliOverrides {
        policy: cli.policy.clone(),
    };
    let config = match GuardConfig::load(&cli.root, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            return exit_code(EXIT_CONFIG_ERROR);
        }
    };
    let paths = ArtifactPaths::resolve(&cli.root, &config);

    let Some(reporter) = create_reporter(cli.format.as_str(), !cli.ci) else {
        eprintln!("error: unsupported report format {}", cli.format.as_str());
        return exit_code(EXIT_CONFIG_ERROR);
    };

    let runner = GuardRunner::new(paths, RunOptions { dry_run: cli.dry }).with_reporter(reporter);
    let outcome = runner.run(&mut std::io::stdout().lock());

    if let RunOutcome::ConfigurationError(ref e) = outcome {
        eprintln!("error: {}", e.coded_string());
    }
    exit_code(outcome.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

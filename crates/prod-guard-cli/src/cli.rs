use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "prod-guard")]
#[command(about = "Check deployment configuration against a production policy", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CI mode: plain output without ANSI colors
    #[arg(long)]
    pub ci: bool,

    /// Analyze and report only; never rewrite artifacts
    #[arg(long)]
    pub dry: bool,

    /// Project root that artifact paths resolve against
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Policy file (overrides env and prod-guard.toml)
    #[arg(long, value_name = "PATH")]
    pub policy: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub format: ReportFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
        }
    }
}

const SWITCHES: [&str; 6] = ["--ci", "--dry", "--help", "-h", "--version", "-V"];
const VALUED: [&str; 3] = ["--root", "--policy", "--format"];

/// Split raw arguments into the ones clap understands and the ones dropped.
///
/// Unknown flags never fail a run; they are returned so the caller can log
/// them once tracing is up.
pub fn retain_known_args<I>(args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        if SWITCHES.contains(&text.as_str()) {
            kept.push(arg);
        } else if VALUED.contains(&text.as_str()) {
            kept.push(arg);
            if let Some(value) = args.next() {
                kept.push(value);
            }
        } else if VALUED
            .iter()
            .any(|flag| text.starts_with(&format!("{flag}=")))
        {
            kept.push(arg);
        } else {
            ignored.push(arg);
        }
    }

    (kept, ignored)
}

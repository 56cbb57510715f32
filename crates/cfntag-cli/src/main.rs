//! # cfntag CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the verbosity
//! flag, resolves the mandated tag map, and dispatches the run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfntag_cli::config;
use cfntag_cli::run::{run_tag, RunOptions};

/// Reconcile mandated tags into a CloudFormation template.
///
/// Adds missing mandated tags and corrects mismatched values on every
/// taggable resource. By default the rewritten template is printed to
/// stdout; `--apply` overwrites the file in place.
#[derive(Parser, Debug)]
#[command(name = "cfntag", version, about, long_about = None)]
struct Cli {
    /// Template file to reconcile.
    #[arg(short, long, value_name = "PATH")]
    filename: PathBuf,

    /// Overwrite the template in place instead of printing to stdout.
    #[arg(long)]
    apply: bool,

    /// Append gitrepo/gitfile provenance tags to every eligible resource.
    #[arg(long)]
    git: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result: anyhow::Result<u8> = (|| {
        let cwd = std::env::current_dir()?;
        let mandated = config::load_mandated_tags(&cwd)?;
        run_tag(
            &RunOptions {
                filename: cli.filename.clone(),
                apply: cli.apply,
                git: cli.git,
            },
            &mandated,
        )
    })();

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

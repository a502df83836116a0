//! # Command Line Interface
//!
//! Runs the website smoke suite and maps its report to the process exit code:
//! 0 when every case passed, 1 when any case failed or errored.

pub mod output;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::SmokeConfig;
use crate::observability::init_logging;
use crate::suite::SmokeSuite;
use crate::{APP_NAME, VERSION};

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "site-smoke")]
#[command(about = "Smoke tests for a locally served website")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base URL of the site under test (default: http://localhost:5173)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub output: String,
}

/// Run the CLI and return the exit code derived from the suite report
pub async fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli).await
}

/// Execute a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging(cli.verbose);

    let format = OutputFormat::parse(&cli.output)?;
    let config =
        SmokeConfig::resolve(cli.base_url).context("Failed to resolve smoke configuration")?;

    info!(
        app_name = APP_NAME,
        version = VERSION,
        base_url = %config.base_url(),
        "Running website smoke suite"
    );

    let suite = SmokeSuite::with_default_checks(config);
    let report = suite.run().await;

    let color = format == OutputFormat::Text && std::io::stdout().is_terminal();
    let rendered = output::render(&report, format, color)?;
    println!("{}", rendered.trim_end());

    Ok(ExitCode::from(report.exit_code()))
}

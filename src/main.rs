//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `verb_tamper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The startup banner
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process;

use verb_tamper::app::print_banner;
use verb_tamper::config::Opt;
use verb_tamper::initialization::init_logger_with;
use verb_tamper::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Opt::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if !config.silent {
        print_banner(config.output_format);
    }

    match run_scan(config).await {
        Ok(report) => {
            log::info!(
                "Done: {} target{}, {} result{}",
                report.targets.len(),
                if report.targets.len() == 1 { "" } else { "s" },
                report.summary.succeeded,
                if report.summary.succeeded == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            eprintln!("{}", Opt::command().render_usage());
            process::exit(1);
        }
    }
}

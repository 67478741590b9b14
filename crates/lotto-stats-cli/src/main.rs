//! lotto-stats: command-line front end for lotto-stats-core
//!
//! Reports go to stdout, logs to stderr. The exit status tells validation,
//! schema, numerical and I/O failures apart.

mod args;
mod commands;
mod exit;
mod logging;
mod menu;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lotto_stats_core::config::AnalysisConfig;

use crate::args::Cli;
use crate::exit::{status_for_error, ExitStatus};

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AnalysisConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("loading configuration")?;
    commands::dispatch(cli, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            let status = status_for_error(&err);
            tracing::debug!(?status, "command failed");
            eprintln!("error: {err:#}");
            status.into()
        }
    }
}

mod chart_cmd;
mod cli;
mod config;
mod convert;
mod forecast_cmd;
mod guidance_cmd;
mod logging;
mod report;
mod workflow_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match cli.command {
        Command::Chart(args) => chart_cmd::run(args, &config),
        Command::Forecast(args) => forecast_cmd::run(args, &config),
        Command::Guidance(args) => guidance_cmd::run(args, &config),
        Command::Workflow(args) => workflow_cmd::run(args, &config),
    }
}

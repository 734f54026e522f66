use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CALIMÉA elemental calendar and vitality toolkit.
#[derive(Parser)]
#[command(
    name = "calimea",
    version,
    about = "Four Pillars chart, band weights and vitality forecast"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. Missing file means defaults.
    #[arg(short, long, global = true, default_value = "calimea.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Derive the chart, day master, band weights and vitality for a birth moment.
    Chart(ChartArgs),
    /// Forecast energy around the vitality derived from a birth moment.
    Forecast(ForecastArgs),
    /// Show the guidance tier for a vitality score.
    Guidance(GuidanceArgs),
    /// List the R-E-B-I-R-T-H workflow stages and their protocols.
    Workflow(WorkflowArgs),
}

/// Birth moment shared by the chart and forecast subcommands.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(short, long)]
    pub date: String,

    /// Birth time, 24-hour HH:MM.
    #[arg(short, long)]
    pub time: String,
}

/// Arguments for the `chart` subcommand.
#[derive(clap::Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Reference moment, YYYY-MM-DDTHH:MM. Defaults to the local clock.
    #[arg(long)]
    pub now: Option<String>,

    /// Current temperature in degrees Celsius. Overrides the config value.
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `guidance` subcommand.
#[derive(clap::Args)]
pub struct GuidanceArgs {
    /// Vitality score.
    #[arg(short, long, allow_hyphen_values = true)]
    pub score: i64,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `workflow` subcommand.
#[derive(clap::Args)]
pub struct WorkflowArgs {
    /// Show a single stage, by id or name (e.g. `ease`).
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Emit JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

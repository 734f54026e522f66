//! Chart command: day master, pillars, band weights and vitality.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use calimea_bazi::day_master_info;

use crate::cli::ChartArgs;
use crate::config::CalimeaConfig;
use crate::convert::{self, OutputFormat};
use crate::report::{self, ChartReport};

/// Run the chart pipeline for one birth moment.
pub fn run(args: ChartArgs, config: &CalimeaConfig) -> Result<()> {
    let _cmd = info_span!("chart").entered();
    let format = convert::build_output_format(&config.output, args.json)?;

    let info = day_master_info(&args.birth.date, &args.birth.time)
        .context("failed to read birth moment")?;
    let report = ChartReport::new(info);
    info!(
        day_master = report.info.day_master.id,
        vitality = report.vitality,
        "chart derived"
    );

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize chart report")?
        ),
        OutputFormat::Text => print!("{}", report::render_chart(&report)),
    }
    Ok(())
}

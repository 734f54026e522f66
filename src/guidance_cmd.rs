//! Guidance command: recommendations for a vitality score.

use anyhow::{Context, Result};

use calimea_vitality::vitality_guidance;

use crate::cli::GuidanceArgs;
use crate::config::CalimeaConfig;
use crate::convert::{self, OutputFormat};
use crate::report;

pub fn run(args: GuidanceArgs, config: &CalimeaConfig) -> Result<()> {
    let format = convert::build_output_format(&config.output, args.json)?;
    let guidance = vitality_guidance(args.score);

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(guidance).context("failed to serialize guidance")?
        ),
        OutputFormat::Text => print!("{}", report::render_guidance(guidance)),
    }
    Ok(())
}

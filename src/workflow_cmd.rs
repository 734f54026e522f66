//! Workflow command: the R-E-B-I-R-T-H stages and their protocols.

use anyhow::{Context, Result};
use serde::Serialize;

use calimea_vitality::{Protocol, STAGES, Stage, find_stage};

use crate::cli::WorkflowArgs;
use crate::config::CalimeaConfig;
use crate::convert::{self, OutputFormat};
use crate::report;

/// A stage with its protocol entries resolved, for JSON output.
#[derive(Serialize)]
struct StageEntry {
    #[serde(flatten)]
    stage: &'static Stage,
    label: String,
    protocol_entries: Vec<&'static Protocol>,
}

pub fn run(args: WorkflowArgs, config: &CalimeaConfig) -> Result<()> {
    let format = convert::build_output_format(&config.output, args.json)?;
    let stages: Vec<&'static Stage> = match args.stage.as_deref() {
        Some(name) => vec![find_stage(name).with_context(|| format!("unknown stage {name:?}"))?],
        None => STAGES.iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let entries: Vec<StageEntry> = stages
                .iter()
                .map(|&stage| StageEntry {
                    stage,
                    label: stage.label(),
                    protocol_entries: stage.protocol_entries().collect(),
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&entries).context("failed to serialize workflow")?
            );
        }
        OutputFormat::Text => print!("{}", report::render_workflow(&stages)),
    }
    Ok(())
}

//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;

use calimea_vitality::ForecastConfig;

use crate::config::{ForecastToml, OutputToml};

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Resolves the output format: `--json` wins over the config file.
pub fn build_output_format(output: &OutputToml, json_flag: bool) -> Result<OutputFormat> {
    if json_flag {
        return Ok(OutputFormat::Json);
    }
    parse_format(&output.format)
}

/// Builds a validated [`ForecastConfig`] from the TOML forecast configuration.
pub fn build_forecast_config(forecast: &ForecastToml) -> Result<ForecastConfig> {
    let cfg = ForecastConfig::new()
        .with_slot_hours(forecast.slot_hours.clone())
        .with_expansion_threshold(forecast.expansion_threshold)
        .with_temperature_divisor(forecast.temperature_divisor);
    cfg.validate().context("invalid [forecast] configuration")?;
    Ok(cfg)
}

/// Parses a `YYYY-MM-DDTHH:MM` reference moment.
pub fn parse_now(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M")
        .with_context(|| format!("invalid --now value {s:?} (expected YYYY-MM-DDTHH:MM)"))
}

//! Forecast command: energy outlook around a birth moment's vitality.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use calimea_bazi::{day_master_info, derive_band_weights};
use calimea_vitality::{energy_forecast, vitality_from_weights};

use crate::cli::ForecastArgs;
use crate::config::CalimeaConfig;
use crate::convert::{self, OutputFormat};
use crate::report;

/// Run the forecast pipeline.
pub fn run(args: ForecastArgs, config: &CalimeaConfig) -> Result<()> {
    let _cmd = info_span!("forecast").entered();
    let format = convert::build_output_format(&config.output, args.json)?;
    let forecast_cfg = convert::build_forecast_config(&config.forecast)?;

    let now = match args.now.as_deref() {
        Some(s) => convert::parse_now(s)?,
        None => Local::now().naive_local(),
    };
    let temperature = args.temperature.or(config.forecast.temperature);

    let info = day_master_info(&args.birth.date, &args.birth.time)
        .context("failed to read birth moment")?;
    let vitality = vitality_from_weights(&derive_band_weights(&info.four_pillars));
    info!(vitality, frequency = info.affinity, %now, "forecasting");

    let forecast = energy_forecast(
        f64::from(vitality),
        info.affinity,
        now,
        temperature,
        &forecast_cfg,
    )
    .context("forecast failed")?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&forecast).context("failed to serialize forecast")?
        ),
        OutputFormat::Text => print!("{}", report::render_forecast(&forecast)),
    }
    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level CALIMÉA configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalimeaConfig {
    /// Report settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Energy forecast settings.
    #[serde(default)]
    pub forecast: ForecastToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastToml {
    #[serde(default = "default_slot_hours")]
    pub slot_hours: Vec<u32>,
    #[serde(default = "default_expansion_threshold")]
    pub expansion_threshold: f64,
    #[serde(default = "default_temperature_divisor")]
    pub temperature_divisor: f64,
    /// Fallback temperature when `--temperature` is not given.
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl Default for ForecastToml {
    fn default() -> Self {
        Self {
            slot_hours: default_slot_hours(),
            expansion_threshold: default_expansion_threshold(),
            temperature_divisor: default_temperature_divisor(),
            temperature: None,
        }
    }
}

fn default_slot_hours() -> Vec<u32> {
    vec![6, 12, 18, 0]
}
fn default_expansion_threshold() -> f64 {
    0.75
}
fn default_temperature_divisor() -> f64 {
    10.0
}

/// Loads the configuration at `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<CalimeaConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CalimeaConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: CalimeaConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.output.format, "text");
        assert_eq!(config.forecast.slot_hours, vec![6, 12, 18, 0]);
        assert!(config.forecast.temperature.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("calimea.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"json\"\n\n[forecast]\ntemperature = -3.5\n",
        )
        .unwrap();
        let config = load(&path).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.forecast.temperature, Some(-3.5));
        assert!((config.forecast.expansion_threshold - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("calimea.toml");
        std::fs::write(&path, "[forecast]\nslots = [1]\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }
}

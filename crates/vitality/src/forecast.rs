//! Hourly, daily and weekly energy forecast around a current vitality score.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::config::ForecastConfig;
use crate::error::VitalityError;

/// Weekday labels for the daily forecast, Monday first.
///
/// "Today" is located in this list by its Sunday-based index, so Sunday
/// lines up with `Mon`, Monday with `Tue` and so on. Daily scores stay
/// compatible with previously published forecasts.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trend {
    Expansion,
    Consolidation,
}

impl Trend {
    /// Display text for the weekly outlook.
    pub fn description(self) -> &'static str {
        match self {
            Trend::Expansion => "Expansion Cycle – Momentum builds",
            Trend::Consolidation => "Consolidation Cycle – Stabilizing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyScore {
    /// Slot label, `HH:00`.
    pub time: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyScore {
    pub day: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyForecast {
    pub hourly: Vec<HourlyScore>,
    pub daily: Vec<DailyScore>,
    pub trend: Trend,
    pub weekly: &'static str,
}

/// Hourly boost: up to 15 points near the current hour, a frequency-phased
/// sine ripple, and the temperature nudge.
fn hour_weight(slot: usize, slot_hour: u32, hour: u32, frequency: f64, temp_impact: f64) -> f64 {
    let distance = f64::from(slot_hour.abs_diff(hour));
    (15.0 - distance * 2.0).max(0.0)
        + ((slot as f64 + frequency) * PI / 4.0).sin() * 5.0
        + temp_impact
}

/// Daily boost: up to 20 points on the current weekday, falling off with the
/// wrap-around distance, plus a frequency-phased cosine ripple.
fn day_weight(slot: usize, today: usize, frequency: f64) -> f64 {
    let diff = slot.abs_diff(today);
    let distance = diff.min(WEEKDAYS.len() - diff) as f64;
    (20.0 - distance * 3.0).max(0.0) + ((slot as f64 + frequency) * PI / 3.0).cos() * 6.0
}

/// Sunday-based weekday index of `now` (Sunday = 0).
fn today_index(now: NaiveDateTime) -> usize {
    now.weekday().num_days_from_sunday() as usize
}

fn clamp_score(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}

/// Builds an energy forecast around `current_score`.
///
/// `frequency` is the archetype's elemental affinity; `temperature` is the
/// current outdoor temperature in °C, treated as 0 when unknown.
///
/// # Errors
///
/// Returns [`VitalityError`] if `config` is invalid or an input is not finite.
pub fn energy_forecast(
    current_score: f64,
    frequency: f64,
    now: NaiveDateTime,
    temperature: Option<f64>,
    config: &ForecastConfig,
) -> Result<EnergyForecast, VitalityError> {
    config.validate()?;
    for (name, value) in [
        ("current score", current_score),
        ("frequency", frequency),
        ("temperature", temperature.unwrap_or(0.0)),
    ] {
        if !value.is_finite() {
            return Err(VitalityError::NonFiniteInput { name, value });
        }
    }

    let hour = now.hour();
    let today = today_index(now);
    let temp_impact = temperature.unwrap_or(0.0) / config.temperature_divisor();

    let hourly = config
        .slot_hours()
        .iter()
        .enumerate()
        .map(|(i, &slot_hour)| HourlyScore {
            time: format!("{slot_hour:02}:00"),
            score: clamp_score(
                current_score + hour_weight(i, slot_hour, hour, frequency, temp_impact),
            ),
        })
        .collect();

    let daily = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &day)| DailyScore {
            day,
            score: clamp_score(current_score + day_weight(i, today, frequency)),
        })
        .collect();

    let trend = if frequency > config.expansion_threshold() {
        Trend::Expansion
    } else {
        Trend::Consolidation
    };
    debug!(%now, current_score, frequency, temp_impact, ?trend, "built energy forecast");

    Ok(EnergyForecast {
        hourly,
        daily,
        trend,
        weekly: trend.description(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn hour_weight_peaks_at_current_hour() {
        // sin(π/4 · 0) = 0
        assert_abs_diff_eq!(hour_weight(0, 12, 12, 0.0, 0.0), 15.0);
        assert_abs_diff_eq!(hour_weight(0, 6, 12, 0.0, 0.0), 3.0);
        assert_abs_diff_eq!(hour_weight(0, 0, 12, 0.0, 0.0), 0.0);
    }

    #[test]
    fn hour_weight_adds_temperature() {
        assert_abs_diff_eq!(hour_weight(0, 12, 12, 0.0, 2.0), 17.0);
    }

    #[test]
    fn day_weight_wraps_around_week() {
        // slot 6 is one step from slot 0 across the wrap; cos(0) = 1
        assert_abs_diff_eq!(day_weight(0, 6, 0.0), 17.0 + 6.0);
        assert_abs_diff_eq!(day_weight(0, 0, 0.0), 20.0 + 6.0);
        // distance 3 is the farthest
        assert_abs_diff_eq!(day_weight(0, 3, 0.0), 11.0 + 6.0);
    }

    #[test]
    fn today_counts_from_sunday() {
        let monday = chrono::NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let sunday = monday + chrono::Duration::days(6);
        assert_eq!(today_index(monday), 1);
        assert_eq!(today_index(sunday), 0);
        assert_ne!(
            today_index(monday),
            monday.weekday().num_days_from_monday() as usize
        );
    }

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-4.0), 0);
        assert_eq!(clamp_score(123.0), 100);
        assert_eq!(clamp_score(74.5), 75);
        assert_eq!(clamp_score(-0.5), 0);
    }

    #[test]
    fn trend_descriptions() {
        assert_eq!(
            Trend::Expansion.description(),
            "Expansion Cycle – Momentum builds"
        );
        assert_eq!(
            Trend::Consolidation.description(),
            "Consolidation Cycle – Stabilizing"
        );
    }
}

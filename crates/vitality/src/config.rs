//! Configuration for energy forecasts.

use crate::error::VitalityError;

/// Configuration for [`energy_forecast`](crate::energy_forecast).
///
/// # Example
///
/// ```
/// use calimea_vitality::ForecastConfig;
///
/// let config = ForecastConfig::new()
///     .with_slot_hours(vec![9, 17])
///     .with_expansion_threshold(0.8);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Hours of day scored in the hourly forecast, in display order.
    slot_hours: Vec<u32>,
    /// Frequency above which the weekly trend is an expansion cycle.
    expansion_threshold: f64,
    /// Degrees Celsius per forecast point of temperature influence.
    temperature_divisor: f64,
}

impl ForecastConfig {
    /// Creates a configuration with the default settings.
    ///
    /// Defaults: `slot_hours = [6, 12, 18, 0]`, `expansion_threshold = 0.75`,
    /// `temperature_divisor = 10.0`.
    pub fn new() -> Self {
        Self {
            slot_hours: vec![6, 12, 18, 0],
            expansion_threshold: 0.75,
            temperature_divisor: 10.0,
        }
    }

    pub fn with_slot_hours(mut self, slot_hours: Vec<u32>) -> Self {
        self.slot_hours = slot_hours;
        self
    }

    pub fn with_expansion_threshold(mut self, threshold: f64) -> Self {
        self.expansion_threshold = threshold;
        self
    }

    pub fn with_temperature_divisor(mut self, divisor: f64) -> Self {
        self.temperature_divisor = divisor;
        self
    }

    pub fn slot_hours(&self) -> &[u32] {
        &self.slot_hours
    }

    pub fn expansion_threshold(&self) -> f64 {
        self.expansion_threshold
    }

    pub fn temperature_divisor(&self) -> f64 {
        self.temperature_divisor
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VitalityError`] if there are no slots, a slot hour is 24 or
    /// more, the threshold is outside [0, 1], or the divisor is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), VitalityError> {
        if self.slot_hours.is_empty() {
            return Err(VitalityError::EmptySlotHours);
        }
        if let Some(&hour) = self.slot_hours.iter().find(|&&h| h > 23) {
            return Err(VitalityError::InvalidSlotHour { hour });
        }
        if !self.expansion_threshold.is_finite() || !(0.0..=1.0).contains(&self.expansion_threshold)
        {
            return Err(VitalityError::InvalidThreshold {
                threshold: self.expansion_threshold,
            });
        }
        if !self.temperature_divisor.is_finite() || self.temperature_divisor <= 0.0 {
            return Err(VitalityError::InvalidTemperatureDivisor {
                divisor: self.temperature_divisor,
            });
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types for the calimea-vitality crate.

/// Error type for all fallible operations in the calimea-vitality crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VitalityError {
    /// Returned when a forecast is configured without any hourly slots.
    #[error("forecast needs at least one hourly slot")]
    EmptySlotHours,

    /// Returned when an hourly slot is not a valid hour of day.
    #[error("invalid slot hour: {hour} (must be 0..=23)")]
    InvalidSlotHour {
        /// The rejected hour.
        hour: u32,
    },

    /// Returned when the expansion threshold is non-finite or outside [0, 1].
    #[error("expansion threshold must be finite and within [0, 1], got {threshold}")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: f64,
    },

    /// Returned when the temperature divisor is non-finite or non-positive.
    #[error("temperature divisor must be finite and positive, got {divisor}")]
    InvalidTemperatureDivisor {
        /// The rejected divisor.
        divisor: f64,
    },

    /// Returned when a forecast input is not finite.
    #[error("{name} must be finite, got {value}")]
    NonFiniteInput {
        /// Which input was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

//! Error types for the calimea-bazi crate.

/// Error type for the string-parsing boundary of the calimea-bazi crate.
///
/// The chart arithmetic itself is total over typed dates and times; only
/// turning caller-supplied strings into those types can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum BaziError {
    /// Returned when a birth date is not an ISO-8601 calendar date.
    #[error("invalid birth date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input string.
        input: String,
    },

    /// Returned when a birth time is not a 24-hour `HH:MM` time.
    #[error("invalid birth time: {input:?} (expected HH:MM)")]
    InvalidTime {
        /// The rejected input string.
        input: String,
    },
}

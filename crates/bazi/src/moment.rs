//! Birth date/time input and the epoch day count.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::BaziError;

/// Civil date the day count is measured from.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d,
    None => panic!("1900-01-01 is a valid date"),
};

/// A validated birth date and time-of-day.
///
/// Dates and times are civil (zone-less). Callers holding zoned timestamps
/// convert to local civil time before constructing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthMoment {
    date: NaiveDate,
    time: NaiveTime,
}

impl BirthMoment {
    /// Creates a moment from an already-typed date and time.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parses an ISO-8601 date (`YYYY-MM-DD`) and a 24-hour `HH:MM` time.
    ///
    /// # Errors
    ///
    /// Returns [`BaziError::InvalidDate`] or [`BaziError::InvalidTime`] when
    /// the corresponding string does not parse.
    pub fn parse(birth_date: &str, birth_time: &str) -> Result<Self, BaziError> {
        let date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").map_err(|_| {
            BaziError::InvalidDate {
                input: birth_date.to_string(),
            }
        })?;
        let time = NaiveTime::parse_from_str(birth_time.trim(), "%H:%M").map_err(|_| {
            BaziError::InvalidTime {
                input: birth_time.to_string(),
            }
        })?;
        Ok(Self { date, time })
    }

    pub fn date(self) -> NaiveDate {
        self.date
    }

    pub fn time(self) -> NaiveTime {
        self.time
    }

    /// Hour of day (0..=23).
    pub fn hour(self) -> u32 {
        self.time.hour()
    }

    /// Whole days elapsed since [`EPOCH`]. See [`days_since_epoch`].
    pub fn days_since_epoch(self) -> i64 {
        days_since_epoch(self.date)
    }
}

/// Whole civil days between [`EPOCH`] and `date`; negative before the epoch.
///
/// The time-of-day never moves this count: a birth at 23:59 still belongs to
/// its own calendar day.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

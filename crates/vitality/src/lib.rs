//! # calimea-vitality
//!
//! Consumer-side derivations over the elemental engine: the vitality blend,
//! guidance tiers, the energy forecast, mixer state and the R-E-B-I-R-T-H
//! workflow catalog.
//!
//! ```
//! use calimea_bazi::{day_master_info, derive_band_weights};
//! use calimea_vitality::{vitality_from_weights, vitality_guidance, GuidanceLevel};
//!
//! let info = day_master_info("1990-01-15", "10:00").unwrap();
//! let score = vitality_from_weights(&derive_band_weights(&info.four_pillars));
//! assert_eq!(score, 76);
//! assert_eq!(vitality_guidance(score.into()).level, GuidanceLevel::High);
//! ```

mod blend;
mod config;
mod error;
mod forecast;
mod guidance;
mod mixer;
mod workflow;

pub use blend::{blend_vitality, vitality_from_weights};
pub use config::ForecastConfig;
pub use error::VitalityError;
pub use forecast::{DailyScore, EnergyForecast, HourlyScore, Trend, WEEKDAYS, energy_forecast};
pub use guidance::{GuidanceLevel, HIGH_ABOVE, MEDIUM_FROM, VitalityGuidance, vitality_guidance};
pub use mixer::{CHANNEL_MAX, MixerState, ProfileSnapshot};
pub use workflow::{
    DEFAULT_PROTOCOL_MS, PROTOCOLS, Protocol, STAGES, Stage, find_protocol, find_stage,
    protocol_duration,
};

//! # calimea-bazi
//!
//! Deterministic Four Pillars arithmetic: chart construction, day-master
//! resolution, elemental affinity and band weights.
//!
//! ## Architecture
//!
//! ```text
//! (date, time)
//!   └─ build_four_pillars()        (pillars.rs)
//!        ├─ resolve_day_stem()      day master
//!        ├─ score_affinity()        (affinity.rs)  [0.50, 1.00]
//!        └─ derive_band_weights()   (bands.rs)     3 x [40, 90]
//! ```
//!
//! Every function is pure over fixed lookup tables; calls are independent and
//! safe to make from any thread.
//!
//! ## Quick Start
//!
//! ```
//! use calimea_bazi::{day_master_info, derive_band_weights};
//!
//! let info = day_master_info("1990-01-15", "10:00").unwrap();
//! assert_eq!(info.full_name, "Yang Wood (甲木)");
//!
//! let weights = derive_band_weights(&info.four_pillars);
//! assert_eq!((weights.stability, weights.flow, weights.clarity), (69, 77, 90));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `element` | Five elements, polarity, production/control cycles |
//! | `symbols` | Stem and branch tables |
//! | `moment` | Birth date/time parsing and epoch day count |
//! | `pillars` | Four Pillars chart and day master |
//! | `affinity` | Elemental affinity score |
//! | `bands` | Band weights |
//! | `archetype` | Archetype labels and band descriptors |
//! | `info` | Aggregate day-master summary |
//! | `error` | Error types |

mod affinity;
mod archetype;
mod bands;
mod element;
mod error;
mod info;
mod moment;
mod pillars;
mod symbols;

pub use affinity::{score_affinity, support_tally};
pub use archetype::{
    ArchetypeProfile, BAND_DESCRIPTORS, BandDescriptor, FALLBACK_LABEL, archetype_label,
    band_descriptor,
};
pub use bands::{
    BAND_MAX, BAND_MIN, Band, BandWeights, RawBandScores, derive_band_weights, raw_band_scores,
};
pub use element::{Element, Polarity};
pub use error::BaziError;
pub use info::{DayMasterInfo, day_master_info};
pub use moment::{BirthMoment, EPOCH, days_since_epoch};
pub use pillars::{FourPillarsChart, Pillar, build_four_pillars, hour_branch_index, resolve_day_stem};
pub use symbols::{BRANCHES, Branch, STEMS, Stem};

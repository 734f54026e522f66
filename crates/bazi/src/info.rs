//! Aggregate day-master summary for a birth moment.

use serde::Serialize;
use tracing::debug;

use crate::affinity::score_affinity;
use crate::archetype::archetype_label;
use crate::error::BaziError;
use crate::moment::BirthMoment;
use crate::pillars::{FourPillarsChart, build_four_pillars};
use crate::symbols::Stem;

/// Everything onboarding needs to know about a birth moment's day master.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMasterInfo {
    pub day_master: &'static Stem,
    pub label: &'static str,
    /// Elemental affinity in `[0.5, 1.0]`.
    pub affinity: f64,
    pub four_pillars: FourPillarsChart,
    /// `"<name> (<script>)"`.
    pub full_name: String,
}

impl DayMasterInfo {
    /// Derives the summary for a validated moment.
    pub fn new(moment: BirthMoment) -> Self {
        let four_pillars = build_four_pillars(moment.date(), moment.time());
        let day_master = four_pillars.day_master();
        let info = Self {
            day_master,
            label: archetype_label(day_master),
            affinity: score_affinity(&four_pillars),
            four_pillars,
            full_name: day_master.full_name(),
        };
        debug!(
            day_master = day_master.id,
            label = info.label,
            affinity = info.affinity,
            "resolved day master"
        );
        info
    }

    /// Parses `YYYY-MM-DD` and `HH:MM` strings and derives the summary.
    ///
    /// # Errors
    ///
    /// Returns [`BaziError`] when either string does not parse.
    pub fn from_strs(birth_date: &str, birth_time: &str) -> Result<Self, BaziError> {
        BirthMoment::parse(birth_date, birth_time).map(Self::new)
    }
}

/// Convenience wrapper over [`DayMasterInfo::from_strs`].
///
/// # Errors
///
/// Returns [`BaziError`] when either string does not parse.
#[tracing::instrument]
pub fn day_master_info(birth_date: &str, birth_time: &str) -> Result<DayMasterInfo, BaziError> {
    DayMasterInfo::from_strs(birth_date, birth_time)
}

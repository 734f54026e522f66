//! Archetype labels and band descriptors keyed by the day master.

use serde::Serialize;

use crate::bands::Band;
use crate::info::DayMasterInfo;
use crate::symbols::Stem;

/// Label used when a stem id has no archetype entry.
pub const FALLBACK_LABEL: &str = "The Seeker";

#[rustfmt::skip]
static ARCHETYPE_LABELS: [(&str, &str); 10] = [
    ("jia",  "The Pioneer"),
    ("yi",   "The Diplomat"),
    ("bing", "The Illuminator"),
    ("ding", "The Refiner"),
    ("wu",   "The Mountain"),
    ("ji",   "The Nurturer"),
    ("geng", "The Warrior"),
    ("xin",  "The Jewel"),
    ("ren",  "The Ocean"),
    ("gui",  "The Flowing Bridge"),
];

/// Returns the archetype label for a day master.
pub fn archetype_label(stem: &Stem) -> &'static str {
    ARCHETYPE_LABELS
        .iter()
        .find(|(id, _)| *id == stem.id)
        .map_or(FALLBACK_LABEL, |&(_, label)| label)
}

/// Cross-tradition description of one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandDescriptor {
    pub band: Band,
    pub chinese: &'static str,
    pub ayurvedic: &'static str,
    pub western: &'static str,
    pub function: &'static str,
}

/// Stability, Flow, Clarity descriptors, in [`Band::ALL`] order.
pub static BAND_DESCRIPTORS: [BandDescriptor; 3] = [
    BandDescriptor {
        band: Band::Stability,
        chinese: "Earth",
        ayurvedic: "Prithvi",
        western: "Earth",
        function: "Stability & Grounding for Family/Career",
    },
    BandDescriptor {
        band: Band::Flow,
        chinese: "Water/Fire",
        ayurvedic: "Jal/Agni",
        western: "Water/Fire",
        function: "Flow & Transformation of Wealth Abundance",
    },
    BandDescriptor {
        band: Band::Clarity,
        chinese: "Wood/Metal",
        ayurvedic: "Vayu/Akasha",
        western: "Air/Spirit",
        function: "Subtle Container for Mindset & Executive Focus",
    },
];

/// Returns the descriptor for one band.
pub fn band_descriptor(band: Band) -> &'static BandDescriptor {
    match band {
        Band::Stability => &BAND_DESCRIPTORS[0],
        Band::Flow => &BAND_DESCRIPTORS[1],
        Band::Clarity => &BAND_DESCRIPTORS[2],
    }
}

/// The constitutional archetype shown to the user after onboarding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeProfile {
    /// `<polarity>_<element>`, e.g. `yang_fire`.
    pub id: String,
    pub label: &'static str,
    /// Day-master display name, e.g. `Yang Fire`.
    pub day_master: &'static str,
    /// The chart's elemental affinity.
    pub frequency: f64,
    pub mappings: [BandDescriptor; 3],
}

impl ArchetypeProfile {
    pub fn from_info(info: &DayMasterInfo) -> Self {
        let stem = info.day_master;
        Self {
            id: format!("{}_{}", stem.polarity.as_str(), stem.element.as_str()),
            label: info.label,
            day_master: stem.name,
            frequency: info.affinity,
            mappings: BAND_DESCRIPTORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::STEMS;

    #[test]
    fn every_stem_has_a_label() {
        for stem in &STEMS {
            assert_ne!(archetype_label(stem), FALLBACK_LABEL, "no label for {}", stem.id);
        }
    }

    #[test]
    fn labels_by_stem() {
        assert_eq!(archetype_label(&STEMS[0]), "The Pioneer");
        assert_eq!(archetype_label(&STEMS[2]), "The Illuminator");
        assert_eq!(archetype_label(&STEMS[9]), "The Flowing Bridge");
    }

    #[test]
    fn unknown_id_falls_back() {
        let mut stem = STEMS[0];
        stem.id = "zzz";
        assert_eq!(archetype_label(&stem), FALLBACK_LABEL);
    }

    #[test]
    fn descriptors_follow_band_order() {
        for band in Band::ALL {
            assert_eq!(band_descriptor(band).band, band);
        }
    }

    #[test]
    fn profile_from_info() {
        let info = DayMasterInfo::from_strs("1950-07-06", "18:20").unwrap();
        let profile = ArchetypeProfile::from_info(&info);
        assert_eq!(profile.id, "yang_fire");
        assert_eq!(profile.label, "The Illuminator");
        assert_eq!(profile.day_master, "Yang Fire");
        assert_eq!(profile.mappings[1].ayurvedic, "Jal/Agni");
    }
}

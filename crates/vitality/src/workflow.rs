//! The seven-stage R-E-B-I-R-T-H workflow and its protocol catalog.

use std::time::Duration;

use serde::Serialize;

/// Hold time for a protocol missing from the catalog.
pub const DEFAULT_PROTOCOL_MS: u64 = 4000;

/// One step of the guided workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Position in the workflow, starting at 1.
    pub order: u8,
    /// Lower-case identifier, e.g. `"recognize"`.
    pub id: &'static str,
    /// Initial shown in the stage label.
    pub letter: char,
    pub name: &'static str,
    /// Chinese sub-label.
    pub script: &'static str,
    /// Names of the protocols this stage offers, in display order.
    pub protocols: &'static [&'static str],
}

impl Stage {
    /// Tab label, e.g. `"R - Recognize"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.letter, self.name)
    }

    /// The catalog entries behind [`Stage::protocols`].
    pub fn protocol_entries(&self) -> impl Iterator<Item = &'static Protocol> + '_ {
        self.protocols.iter().filter_map(|name| find_protocol(name))
    }
}

/// A timed directive activated from a workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Protocol {
    pub name: &'static str,
    pub instruction: &'static str,
    pub action: &'static str,
    /// How long the directive stays active, in milliseconds.
    pub duration_ms: u64,
}

impl Protocol {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

const fn stage(
    order: u8,
    id: &'static str,
    letter: char,
    name: &'static str,
    script: &'static str,
    protocols: &'static [&'static str],
) -> Stage {
    Stage { order, id, letter, name, script, protocols }
}

const fn protocol(
    name: &'static str,
    instruction: &'static str,
    action: &'static str,
    duration_ms: u64,
) -> Protocol {
    Protocol { name, instruction, action, duration_ms }
}

#[rustfmt::skip]
pub static STAGES: [Stage; 7] = [
    stage(1, "recognize", 'R', "Recognize", "觉察", &[]),
    stage(2, "ease",      'E', "Ease",      "安抚", &["Energy Cloud"]),
    stage(3, "balance",   'B', "Balance",   "平衡", &["Stabilization Serum"]),
    stage(4, "intention", 'I', "Intention", "意图", &[]),
    stage(5, "rebuild",   'R', "Rebuild",   "重建", &["Deep Reset"]),
    stage(6, "transform", 'T', "Transform", "转化", &[
        "Pre-Boardroom Focus",
        "Leadership Offsites",
        "Team Energy Activation",
        "VIP Gifting Suites",
    ]),
    stage(7, "hold",      'H', "Hold",      "守护", &[]),
];

pub static PROTOCOLS: [Protocol; 7] = [
    protocol(
        "Energy Cloud",
        "Mist the Refreshing Energy Spray 30cm from face.",
        "Close eyes and inhale the citrus-gold notes.",
        3000,
    ),
    protocol(
        "Stabilization Serum",
        "Apply Calm Essence to your wrist pulse points.",
        "Press wrists together and breathe into the heart center.",
        4000,
    ),
    protocol(
        "Deep Reset",
        "Initialize full-system Detox & Luck-Cleansing.",
        "Focus on releasing stagnant energy from the day.",
        5000,
    ),
    protocol(
        "Pre-Boardroom Focus",
        "Shift to Executive Presence frequency.",
        "Inhale deeply. Picture your outcome as already realized.",
        4000,
    ),
    protocol(
        "Leadership Offsites",
        "Synchronizing collective field frequency.",
        "Expand your awareness to the entire room.",
        6000,
    ),
    protocol(
        "Team Energy Activation",
        "Deploying Team Coherence Signal.",
        "Center yourself to act as the energetic anchor.",
        4000,
    ),
    protocol(
        "VIP Gifting Suites",
        "Presenting the High-Fidelity Gift Experience.",
        "Share the CALIMÉA story of systemic recovery.",
        3000,
    ),
];

/// Looks up a stage by id or name, ignoring ASCII case.
pub fn find_stage(name: &str) -> Option<&'static Stage> {
    let name = name.trim();
    STAGES
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(name) || s.name.eq_ignore_ascii_case(name))
}

/// Looks up a protocol by its exact catalog name, ignoring ASCII case.
pub fn find_protocol(name: &str) -> Option<&'static Protocol> {
    let name = name.trim();
    PROTOCOLS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Hold time for `name`, or [`DEFAULT_PROTOCOL_MS`] when it is not catalogued.
pub fn protocol_duration(name: &str) -> Duration {
    find_protocol(name).map_or(Duration::from_millis(DEFAULT_PROTOCOL_MS), Protocol::duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_spell_rebirth() {
        let word: String = STAGES.iter().map(|s| s.letter).collect();
        assert_eq!(word, "REBIRTH");
        for (i, s) in STAGES.iter().enumerate() {
            assert_eq!(usize::from(s.order), i + 1);
        }
    }

    #[test]
    fn stage_labels() {
        assert_eq!(STAGES[0].label(), "R - Recognize");
        assert_eq!(STAGES[6].label(), "H - Hold");
        assert_eq!(STAGES[2].script, "平衡");
    }

    #[test]
    fn find_stage_by_id_or_name() {
        assert_eq!(find_stage("ease").map(|s| s.order), Some(2));
        assert_eq!(find_stage("Transform").map(|s| s.order), Some(6));
        assert_eq!(find_stage(" HOLD ").map(|s| s.id), Some("hold"));
        assert!(find_stage("rest").is_none());
    }

    #[test]
    fn every_stage_protocol_is_catalogued() {
        let mut referenced = 0;
        for s in &STAGES {
            assert_eq!(s.protocol_entries().count(), s.protocols.len(), "{}", s.id);
            referenced += s.protocols.len();
        }
        assert_eq!(referenced, PROTOCOLS.len());
    }

    #[test]
    fn transform_offers_four_protocols() {
        let names: Vec<&str> = find_stage("transform")
            .unwrap()
            .protocol_entries()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            [
                "Pre-Boardroom Focus",
                "Leadership Offsites",
                "Team Energy Activation",
                "VIP Gifting Suites",
            ]
        );
    }

    #[test]
    fn protocol_durations() {
        assert_eq!(protocol_duration("Energy Cloud"), Duration::from_secs(3));
        assert_eq!(protocol_duration("deep reset"), Duration::from_secs(5));
        assert_eq!(protocol_duration("Leadership Offsites"), Duration::from_secs(6));
        assert_eq!(protocol_duration("Unknown Ritual"), Duration::from_secs(4));
    }

    #[test]
    fn protocol_text() {
        let p = find_protocol("Stabilization Serum").unwrap();
        assert_eq!(p.instruction, "Apply Calm Essence to your wrist pulse points.");
        assert_eq!(p.action, "Press wrists together and breathe into the heart center.");
    }
}

//! Vitality guidance tiers.

use serde::Serialize;

/// Score above which guidance is [`GuidanceLevel::High`].
pub const HIGH_ABOVE: i64 = 75;
/// Lowest score that still counts as [`GuidanceLevel::Medium`].
pub const MEDIUM_FROM: i64 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GuidanceLevel {
    High,
    Medium,
    Low,
}

/// Recommendations for one vitality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VitalityGuidance {
    pub level: GuidanceLevel,
    pub label: &'static str,
    /// Display colour as `#RRGGBB`.
    pub color: &'static str,
    pub dos: [&'static str; 3],
    pub donts: [&'static str; 3],
}

static HIGH: VitalityGuidance = VitalityGuidance {
    level: GuidanceLevel::High,
    label: "Peak Performance",
    color: "#FFD700",
    dos: [
        "Finalize high-stakes strategic decisions",
        "Lead major transformation or vision sessions",
        "Engage in intensive creative brainstorming",
    ],
    donts: [
        "Wasting peak energy on routine admin",
        "Neglecting to document high-level insights",
        "Ignoring the need for scheduled cool-downs",
    ],
};

static MEDIUM: VitalityGuidance = VitalityGuidance {
    level: GuidanceLevel::Medium,
    label: "Sustainable Flow",
    color: "#2DD4BF",
    dos: [
        "Execute operational tasks & management",
        "Maintain team alignment & communication",
        "Focus on project milestones & stability",
    ],
    donts: [
        "Over-extending into speculative risks",
        "Ignoring subtle signs of mental fatigue",
        "Skipping mid-day synchronization breaks",
    ],
};

static LOW: VitalityGuidance = VitalityGuidance {
    level: GuidanceLevel::Low,
    label: "Structural Preservation",
    color: "#F87171",
    dos: [
        "Prioritize deep systemic recovery",
        "Delegate non-essential operational duties",
        "Focus on low-bandwidth coordination",
    ],
    donts: [
        "Engaging in high-conflict negotiations",
        "Making long-term capital commitments",
        "Pushing through physical exhaustion",
    ],
};

/// Returns the guidance tier for a vitality score.
pub fn vitality_guidance(score: i64) -> &'static VitalityGuidance {
    if score > HIGH_ABOVE {
        &HIGH
    } else if score >= MEDIUM_FROM {
        &MEDIUM
    } else {
        &LOW
    }
}

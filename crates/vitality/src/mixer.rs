//! Mixer channel state and the profile snapshot handed to persistence.

use calimea_bazi::{ArchetypeProfile, Band, BandWeights};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blend::blend_vitality;

/// Upper bound of a mixer channel.
pub const CHANNEL_MAX: u8 = 100;

/// Current mixer channel levels and the vitality score derived from them.
///
/// Construction and [`MixerState::update`] recompute `vitality` from the
/// channels; [`MixerState::reset`] zeroes it. Deserialized states keep their
/// stored `vitality` but have every channel clamped to `0..=CHANNEL_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMixerState")]
pub struct MixerState {
    stability: u8,
    flow: u8,
    clarity: u8,
    vitality: u8,
}

impl MixerState {
    /// Creates a state from channel levels, clamping each to `0..=100`.
    pub fn new(stability: u8, flow: u8, clarity: u8) -> Self {
        let mut state = Self {
            stability: stability.min(CHANNEL_MAX),
            flow: flow.min(CHANNEL_MAX),
            clarity: clarity.min(CHANNEL_MAX),
            vitality: 0,
        };
        state.recompute();
        state
    }

    /// Seeds the mixer from engine band weights.
    pub fn from_band_weights(weights: &BandWeights) -> Self {
        Self::new(weights.stability, weights.flow, weights.clarity)
    }

    pub fn get(&self, band: Band) -> u8 {
        match band {
            Band::Stability => self.stability,
            Band::Flow => self.flow,
            Band::Clarity => self.clarity,
        }
    }

    pub fn vitality(&self) -> u8 {
        self.vitality
    }

    /// Sets one channel (clamped to `0..=100`) and recomputes vitality.
    pub fn update(&mut self, band: Band, value: u8) {
        let value = value.min(CHANNEL_MAX);
        match band {
            Band::Stability => self.stability = value,
            Band::Flow => self.flow = value,
            Band::Clarity => self.clarity = value,
        }
        self.recompute();
        debug!(band = band.as_str(), value, vitality = self.vitality, "mixer updated");
    }

    /// Returns every channel to 50 with a zeroed vitality score.
    pub fn reset(&mut self) {
        self.stability = 50;
        self.flow = 50;
        self.clarity = 50;
        self.vitality = 0;
    }

    fn recompute(&mut self) {
        self.vitality = blend_vitality(
            f64::from(self.stability),
            f64::from(self.flow),
            f64::from(self.clarity),
        )
        .clamp(0, i64::from(CHANNEL_MAX)) as u8;
    }
}

/// Unchecked wire shape of [`MixerState`].
#[derive(Deserialize)]
struct StoredMixerState {
    stability: u8,
    flow: u8,
    clarity: u8,
    vitality: u8,
}

impl From<StoredMixerState> for MixerState {
    fn from(stored: StoredMixerState) -> Self {
        Self {
            stability: stored.stability.min(CHANNEL_MAX),
            flow: stored.flow.min(CHANNEL_MAX),
            clarity: stored.clarity.min(CHANNEL_MAX),
            vitality: stored.vitality.min(CHANNEL_MAX),
        }
    }
}

impl Default for MixerState {
    /// 70 / 60 / 80, vitality 69.
    fn default() -> Self {
        Self::new(70, 60, 80)
    }
}

/// The onboarding outcome a state store persists between sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSnapshot {
    pub band_weights: BandWeights,
    pub vitality_score: u8,
    pub archetype: ArchetypeProfile,
}

impl ProfileSnapshot {
    pub fn new(band_weights: BandWeights, archetype: ArchetypeProfile) -> Self {
        Self {
            band_weights,
            vitality_score: MixerState::from_band_weights(&band_weights).vitality(),
            archetype,
        }
    }
}

//! Band weights: the chart's elemental histogram reduced to three channels.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::pillars::FourPillarsChart;

/// Lowest normalised band weight.
pub const BAND_MIN: u8 = 40;
/// Highest normalised band weight.
pub const BAND_MAX: u8 = 90;

/// One of the three mixer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Stability,
    Flow,
    Clarity,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Stability, Band::Flow, Band::Clarity];

    pub fn as_str(self) -> &'static str {
        match self {
            Band::Stability => "stability",
            Band::Flow => "flow",
            Band::Clarity => "clarity",
        }
    }
}

/// Un-normalised channel strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawBandScores {
    pub stability: u32,
    pub flow: u32,
    pub clarity: u32,
}

impl RawBandScores {
    pub fn max(&self) -> u32 {
        self.stability.max(self.flow).max(self.clarity)
    }
}

/// Normalised channel weights, each in `[BAND_MIN, BAND_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandWeights {
    pub stability: u8,
    pub flow: u8,
    pub clarity: u8,
}

impl BandWeights {
    pub fn get(&self, band: Band) -> u8 {
        match band {
            Band::Stability => self.stability,
            Band::Flow => self.flow,
            Band::Clarity => self.clarity,
        }
    }
}

/// Computes the raw channel strengths from the chart's histogram.
pub fn raw_band_scores(chart: &FourPillarsChart) -> RawBandScores {
    let hist = chart.element_histogram();
    let count = |e: Element| hist[e.index()];

    let master = chart.day_master();
    let own = master.element;
    let (yin_bonus, yang_bonus) = match master.polarity {
        Polarity::Yin => (10, 5),
        Polarity::Yang => (5, 10),
    };

    RawBandScores {
        stability: 5 * count(Element::Earth) + 3 * count(own.producer()) + yin_bonus,
        flow: 4 * count(Element::Water) + 4 * count(Element::Fire) + 3 * count(own),
        clarity: 4 * count(Element::Metal)
            + 4 * count(Element::Wood)
            + 2 * count(own.controller())
            + yang_bonus,
    }
}

/// Scales `raw` against `max` into `[BAND_MIN, BAND_MAX]`.
fn normalise(raw: u32, max: u32) -> u8 {
    let scaled = f64::from(raw) / f64::from(max) * 50.0 + 40.0;
    scaled
        .clamp(f64::from(BAND_MIN), f64::from(BAND_MAX))
        .round() as u8
}

/// Derives the three band weights for a chart.
///
/// The strongest raw channel always lands on [`BAND_MAX`]; the others scale
/// linearly below it.
pub fn derive_band_weights(chart: &FourPillarsChart) -> BandWeights {
    let raw = raw_band_scores(chart);
    // The polarity bonus keeps every raw score at least 5.
    let max = raw.max();
    BandWeights {
        stability: normalise(raw.stability, max),
        flow: normalise(raw.flow, max),
        clarity: normalise(raw.clarity, max),
    }
}

//! Elemental affinity: how strongly a chart reinforces its own day master.

use crate::pillars::FourPillarsChart;

/// Tally divisor. The largest reachable tally is 12 (every stem and branch
/// sharing the day master's element), so scores top out at 0.75.
const AFFINITY_DIVISOR: f64 = 16.0;
const AFFINITY_MIN: f64 = 0.5;
const AFFINITY_MAX: f64 = 1.0;

const SAME_STEM: f64 = 2.0;
const SAME_BRANCH: f64 = 1.0;
const PRODUCING_STEM: f64 = 1.5;
const PRODUCING_BRANCH: f64 = 0.5;

/// Raw support tally for the day master before normalisation.
pub fn support_tally(chart: &FourPillarsChart) -> f64 {
    let own = chart.day_master().element;
    let producing = own.producer();

    let mut tally = 0.0;
    for stem in chart.stems() {
        if stem.element == own {
            tally += SAME_STEM;
        } else if stem.element == producing {
            tally += PRODUCING_STEM;
        }
    }
    for branch in chart.branches() {
        if branch.element == own {
            tally += SAME_BRANCH;
        } else if branch.element == producing {
            tally += PRODUCING_BRANCH;
        }
    }
    tally
}

/// Scores the chart's elemental affinity in `[0.5, 1.0]`, rounded to two
/// decimals.
pub fn score_affinity(chart: &FourPillarsChart) -> f64 {
    let frequency = (support_tally(chart) / AFFINITY_DIVISOR).clamp(AFFINITY_MIN, AFFINITY_MAX);
    (frequency * 100.0).round() / 100.0
}

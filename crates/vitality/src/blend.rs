//! Weighted blend of the three band channels into one vitality score.

use calimea_bazi::BandWeights;

// Channel weights in tenths: 0.5, 0.3, 0.2.
const STABILITY_TENTHS: f64 = 5.0;
const FLOW_TENTHS: f64 = 3.0;
const CLARITY_TENTHS: f64 = 2.0;

/// `round(0.5·stability + 0.3·flow + 0.2·clarity)`, halves rounding up
/// (towards positive infinity, so -2.5 becomes -2).
///
/// The sum is taken in tenths so integer channels blend exactly and ties
/// such as 9.5 are not lost to binary fractions.
///
/// Defined for any finite inputs; meaningful for the 0..=100 display range,
/// where the result also stays within 0..=100.
pub fn blend_vitality(stability: f64, flow: f64, clarity: f64) -> i64 {
    let tenths = stability * STABILITY_TENTHS + flow * FLOW_TENTHS + clarity * CLARITY_TENTHS;
    ((tenths + 5.0) / 10.0).floor() as i64
}

/// Blends engine band weights into a vitality score.
pub fn vitality_from_weights(weights: &BandWeights) -> u8 {
    blend_vitality(
        f64::from(weights.stability),
        f64::from(weights.flow),
        f64::from(weights.clarity),
    )
    .clamp(0, 100) as u8
}

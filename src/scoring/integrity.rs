//! Overall score, integrity tier, and blending with an external score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AxisScores;
use crate::detectors::NEUTRAL_SCORE;
use crate::reference::Axis;

const ENGINE_WEIGHT: f64 = 0.6;
const EXTERNAL_WEIGHT: f64 = 0.4;

/// How much real signal backs a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityTier {
    Placeholder,
    Partial,
    Live,
}

impl IntegrityTier {
    pub fn assess(spec_loaded: bool, has_contributions: bool, scores: &AxisScores) -> Self {
        if !spec_loaded || !has_contributions {
            return IntegrityTier::Placeholder;
        }
        match deviating_key_axes(scores) {
            0 => IntegrityTier::Placeholder,
            1 | 2 => IntegrityTier::Partial,
            _ => IntegrityTier::Live,
        }
    }
}

impl fmt::Display for IntegrityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IntegrityTier::Placeholder => "placeholder",
            IntegrityTier::Partial => "partial",
            IntegrityTier::Live => "live",
        };
        f.write_str(label)
    }
}

/// Key axes whose score moved off the neutral baseline.
pub fn deviating_key_axes(scores: &AxisScores) -> usize {
    Axis::KEY
        .iter()
        .filter(|&&axis| scores.get(axis) as i32 != NEUTRAL_SCORE)
        .count()
}

/// Unweighted mean of the four key axes.
pub fn overall_score(scores: &AxisScores) -> u8 {
    let sum: u32 = Axis::KEY.iter().map(|&a| scores.get(a) as u32).sum();
    (sum as f64 / Axis::KEY.len() as f64).round() as u8
}

/// Blend the engine's score with one from another modality, 60/40 in the
/// engine's favour.
pub fn merge_scores(engine_score: u8, external_score: u8) -> u8 {
    let blended =
        engine_score.min(100) as f64 * ENGINE_WEIGHT + external_score.min(100) as f64 * EXTERNAL_WEIGHT;
    blended.round().clamp(0.0, 100.0) as u8
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reference::Axis;
use crate::scoring::{merge_scores, ActiveFlag, AxisScores, FrameType, IntegrityTier};

/// The engine's output for one session. Always recomputed from answers,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeMetrics {
    pub axis_scores: AxisScores,
    pub active_flags: Vec<ActiveFlag>,
    /// Engine score, or the blend with an external score once merged.
    pub overall_score: u8,
    /// Engine-only overall score; merges always blend from this.
    pub engine_score: u8,
    pub external_score: Option<u8>,
    pub frame_type: FrameType,
    pub integrity: IntegrityTier,
    /// False when no analysis happened and every axis reads zero.
    pub analysis_available: bool,
    pub self_rating: Option<f64>,
    pub computed_at: DateTime<Utc>,
}

impl IntakeMetrics {
    pub fn score(&self, axis: Axis) -> u8 {
        self.axis_scores.get(axis)
    }

    /// Blend in a 0-100 score from another modality. Idempotent: the blend
    /// is always taken from the engine-only score, so repeating a merge (or
    /// merging a newer external score) never compounds.
    pub fn merge_external_score(&self, external_score: u8) -> Self {
        let external_score = external_score.min(100);
        Self {
            overall_score: merge_scores(self.engine_score, external_score),
            external_score: Some(external_score),
            ..self.clone()
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "frame={} integrity={} overall={} flags={}",
            self.frame_type,
            self.integrity,
            self.overall_score,
            self.active_flags.len()
        )
    }
}

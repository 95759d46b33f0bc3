//! Axis aggregation
//!
//! Folds every contribution of a session onto a 50 baseline, then computes
//! the derived axes as fixed blends of the primary ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::analysis::AnalyzedAnswer;
use crate::detectors::NEUTRAL_SCORE;
use crate::reference::{Axis, SpecState};

/// (axis, weight) pairs per derived axis. Operational congruence is a
/// straight copy of process clarity.
const STATUS_FRAME: [(Axis, f64); 2] = [
    (Axis::LinguisticAuthority, 0.6),
    (Axis::LocusOfControl, 0.4),
];
const OPERATIONAL_CONGRUENCE: [(Axis, f64); 1] = [(Axis::ProcessClarity, 1.0)];
const BOUNDARY_CONTROL: [(Axis, f64); 2] = [
    (Axis::LinguisticAuthority, 0.5),
    (Axis::LocusOfControl, 0.5),
];
const FRAME_STRENGTH: [(Axis, f64); 4] = [
    (Axis::LocusOfControl, 0.25),
    (Axis::LinguisticAuthority, 0.30),
    (Axis::StatusFrame, 0.25),
    (Axis::BoundaryControl, 0.20),
];

/// One 0-100 score per axis. Deserialized maps are clamped and missing
/// axes read as 0, the same as `set` and `get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Axis, i64>", into = "BTreeMap<Axis, u8>")]
pub struct AxisScores(BTreeMap<Axis, u8>);

impl AxisScores {
    pub fn filled(value: u8) -> Self {
        Self(Axis::ALL.iter().map(|&a| (a, value.min(100))).collect())
    }

    pub fn neutral() -> Self {
        Self::filled(NEUTRAL_SCORE as u8)
    }

    /// The "no analysis occurred" state.
    pub fn zeroed() -> Self {
        Self::filled(0)
    }

    pub fn get(&self, axis: Axis) -> u8 {
        self.0.get(&axis).copied().unwrap_or(0)
    }

    pub fn set(&mut self, axis: Axis, score: i32) {
        self.0.insert(axis, score.clamp(0, 100) as u8);
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.values().all(|&s| s == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, u8)> + '_ {
        self.0.iter().map(|(&a, &s)| (a, s))
    }

    fn blend(&self, weights: &[(Axis, f64)]) -> i32 {
        weights
            .iter()
            .map(|&(axis, w)| self.get(axis) as f64 * w)
            .sum::<f64>()
            .round() as i32
    }

    /// Recompute every derived axis from the primary axes currently held.
    /// Frame strength reads the freshly derived status and boundary scores.
    pub fn derive(&mut self) {
        let status = self.blend(&STATUS_FRAME);
        self.set(Axis::StatusFrame, status);
        let congruence = self.blend(&OPERATIONAL_CONGRUENCE);
        self.set(Axis::OperationalCongruence, congruence);
        let boundary = self.blend(&BOUNDARY_CONTROL);
        self.set(Axis::BoundaryControl, boundary);
        let strength = self.blend(&FRAME_STRENGTH);
        self.set(Axis::FrameStrength, strength);
    }
}

impl From<BTreeMap<Axis, i64>> for AxisScores {
    fn from(raw: BTreeMap<Axis, i64>) -> Self {
        let mut scores = Self::zeroed();
        for (axis, value) in raw {
            scores.set(axis, value.clamp(0, 100) as i32);
        }
        scores
    }
}

impl From<AxisScores> for BTreeMap<Axis, u8> {
    fn from(scores: AxisScores) -> Self {
        scores.0
    }
}

impl Default for AxisScores {
    fn default() -> Self {
        Self::neutral()
    }
}

pub struct AxisAggregator;

impl AxisAggregator {
    /// Aggregate a whole session from the baseline. Returns all zeros when
    /// the reference spec is missing or nothing contributed.
    pub fn aggregate(spec: &SpecState, answers: &[AnalyzedAnswer]) -> AxisScores {
        if !spec.is_loaded() || !has_contributions(answers) {
            return AxisScores::zeroed();
        }

        let mut scores = AxisScores::neutral();
        for contribution in answers.iter().flat_map(|a| &a.analysis.contributions) {
            if contribution.axis.is_derived() {
                debug!(
                    "Contribution of {} to derived axis {} via {} is replaced on derive",
                    contribution.delta, contribution.axis, contribution.source
                );
            }
            let current = scores.get(contribution.axis) as i32;
            scores.set(contribution.axis, current + contribution.delta);
        }
        scores.derive();
        scores
    }
}

pub fn has_contributions(answers: &[AnalyzedAnswer]) -> bool {
    answers.iter().any(|a| !a.analysis.contributions.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Answer, AnswerAnalysis, AxisContribution};
    use crate::reference::DetectorKind;

    fn analyzed(contributions: Vec<(Axis, i32)>) -> AnalyzedAnswer {
        AnalyzedAnswer {
            answer: Answer::new("failure_narrative", "text"),
            analysis: AnswerAnalysis {
                contributions: contributions
                    .into_iter()
                    .map(|(axis, delta)| AxisContribution {
                        axis,
                        delta,
                        source: DetectorKind::LocusAuthority,
                    })
                    .collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_contributions_accumulate_with_clamping() {
        let spec = SpecState::bundled();
        let answers = vec![
            analyzed(vec![(Axis::LocusOfControl, 40), (Axis::LinguisticAuthority, -10)]),
            analyzed(vec![(Axis::LocusOfControl, 40)]),
            analyzed(vec![(Axis::LocusOfControl, -30)]),
        ];
        let scores = AxisAggregator::aggregate(&spec, &answers);
        // 50 + 40 = 90, + 40 clamps to 100, - 30 = 70
        assert_eq!(scores.get(Axis::LocusOfControl), 70);
        assert_eq!(scores.get(Axis::LinguisticAuthority), 40);
        assert_eq!(scores.get(Axis::MotivationDirection), 50);
        assert_eq!(scores.get(Axis::PricingConfidence), 50);
    }

    #[test]
    fn test_derived_axes() {
        let mut scores = AxisScores::neutral();
        scores.set(Axis::LocusOfControl, 70);
        scores.set(Axis::LinguisticAuthority, 44);
        scores.set(Axis::ProcessClarity, 81);
        scores.derive();
        // 0.6*44 + 0.4*70 = 54.4
        assert_eq!(scores.get(Axis::StatusFrame), 54);
        assert_eq!(scores.get(Axis::OperationalCongruence), 81);
        assert_eq!(scores.get(Axis::BoundaryControl), 57);
        // 0.25*70 + 0.30*44 + 0.25*54 + 0.20*57 = 55.6
        assert_eq!(scores.get(Axis::FrameStrength), 56);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let mut a = AxisScores::neutral();
        a.set(Axis::LocusOfControl, 13);
        a.set(Axis::LinguisticAuthority, 97);
        let mut b = a.clone();
        a.derive();
        b.derive();
        assert_eq!(a, b);
        let once = a.clone();
        a.derive();
        assert_eq!(a, once);
    }

    #[test]
    fn test_primary_congruence_contribution_is_overwritten() {
        let spec = SpecState::bundled();
        let answers = vec![analyzed(vec![(Axis::OperationalCongruence, 30)])];
        let scores = AxisAggregator::aggregate(&spec, &answers);
        assert_eq!(scores.get(Axis::OperationalCongruence), scores.get(Axis::ProcessClarity));
    }

    #[test]
    fn test_degraded_and_empty_sessions_are_zero() {
        let answers = vec![analyzed(vec![(Axis::LocusOfControl, 10)])];
        let degraded = AxisAggregator::aggregate(&SpecState::unavailable("test"), &answers);
        assert!(degraded.is_all_zero());

        let empty = AxisAggregator::aggregate(&SpecState::bundled(), &[analyzed(vec![])]);
        assert!(empty.is_all_zero());
        assert_eq!(empty.iter().count(), Axis::ALL.len());
    }

    #[test]
    fn test_set_clamps() {
        let mut scores = AxisScores::zeroed();
        scores.set(Axis::FrameStrength, 250);
        scores.set(Axis::StatusFrame, -4);
        assert_eq!(scores.get(Axis::FrameStrength), 100);
        assert_eq!(scores.get(Axis::StatusFrame), 0);
    }

    #[test]
    fn test_deserialize_clamps_and_fills() {
        let scores: AxisScores =
            serde_json::from_str(r#"{"locus_of_control": 255, "process_clarity": -12}"#).unwrap();
        assert_eq!(scores.get(Axis::LocusOfControl), 100);
        assert_eq!(scores.get(Axis::ProcessClarity), 0);
        assert_eq!(scores.get(Axis::MotivationDirection), 0);
        assert_eq!(scores.iter().count(), Axis::ALL.len());
    }

    #[test]
    fn test_serialized_scores_read_back_unchanged() {
        let mut scores = AxisScores::neutral();
        scores.set(Axis::LocusOfControl, 71);
        scores.derive();
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("\"locus_of_control\":71"));
        let back: AxisScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }
}

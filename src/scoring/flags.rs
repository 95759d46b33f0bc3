//! Flag aggregation: dedupe flags raised across answers, attach evidence
//! and a frequency-based confidence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::analysis::AnalyzedAnswer;
use crate::reference::{FlagCode, Severity, SpecState};

/// Triggers needed for full confidence.
const FULL_CONFIDENCE_TRIGGERS: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFlag {
    pub code: FlagCode,
    pub severity: Severity,
    pub description: String,
    pub confidence: f32,
    pub trigger_count: usize,
    /// Ids of the answers that raised this flag.
    pub evidence: Vec<String>,
}

pub fn flag_confidence(trigger_count: usize) -> f32 {
    (trigger_count as f32 / FULL_CONFIDENCE_TRIGGERS).min(1.0)
}

pub struct FlagAggregator;

impl FlagAggregator {
    /// Flags without a reference definition are dropped.
    pub fn aggregate(spec: &SpecState, answers: &[AnalyzedAnswer]) -> Vec<ActiveFlag> {
        let Some(reference) = spec.spec() else {
            return Vec::new();
        };

        let mut triggered: BTreeMap<FlagCode, Vec<String>> = BTreeMap::new();
        for analyzed in answers {
            for &code in &analyzed.analysis.flags {
                triggered
                    .entry(code)
                    .or_default()
                    .push(analyzed.answer.id.clone());
            }
        }

        triggered
            .into_iter()
            .filter_map(|(code, evidence)| {
                let Some(definition) = reference.flag(code) else {
                    warn!("Dropping flag '{}' with no reference definition", code);
                    return None;
                };
                Some(ActiveFlag {
                    code,
                    severity: definition.severity,
                    description: definition.description.clone(),
                    confidence: flag_confidence(evidence.len()),
                    trigger_count: evidence.len(),
                    evidence,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Answer, AnswerAnalysis};
    use crate::reference::ReferenceSpec;

    fn flagged(id: &str, flags: Vec<FlagCode>) -> AnalyzedAnswer {
        AnalyzedAnswer {
            answer: Answer::new("failure_narrative", "text").with_id(id),
            analysis: AnswerAnalysis {
                flags,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_confidence_is_monotonic_and_capped() {
        assert_eq!(flag_confidence(0), 0.0);
        assert_eq!(flag_confidence(1), 0.5);
        assert_eq!(flag_confidence(2), 1.0);
        assert_eq!(flag_confidence(7), 1.0);
        for n in 0..10 {
            assert!(flag_confidence(n) <= flag_confidence(n + 1));
        }
    }

    #[test]
    fn test_flags_are_deduplicated_with_evidence() {
        let answers = vec![
            flagged("a1", vec![FlagCode::LocusExternal, FlagCode::AgencyWarning]),
            flagged("a2", vec![]),
            flagged("a3", vec![FlagCode::LocusExternal]),
        ];
        let flags = FlagAggregator::aggregate(&SpecState::bundled(), &answers);
        assert_eq!(flags.len(), 2);

        let warning = &flags[0];
        assert_eq!(warning.code, FlagCode::AgencyWarning);
        assert_eq!(warning.severity, Severity::Critical);
        assert_eq!(warning.confidence, 0.5);

        let external = &flags[1];
        assert_eq!(external.code, FlagCode::LocusExternal);
        assert_eq!(external.evidence, vec!["a1".to_string(), "a3".to_string()]);
        assert_eq!(external.trigger_count, 2);
        assert_eq!(external.confidence, 1.0);
    }

    #[test]
    fn test_undefined_flags_are_dropped() {
        let yaml = r#"
axes:
  - id: locus_of_control
  - id: motivation_direction
  - id: process_clarity
  - id: linguistic_authority
flags:
  - code: gap_detected
    severity: warn
"#;
        let spec = SpecState::from_result(ReferenceSpec::from_yaml_str(yaml));
        let answers = vec![flagged("a1", vec![FlagCode::GapDetected, FlagCode::CommitmentSoft])];
        let flags = FlagAggregator::aggregate(&spec, &answers);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].code, FlagCode::GapDetected);
    }

    #[test]
    fn test_no_flags_without_spec() {
        let answers = vec![flagged("a1", vec![FlagCode::GapDetected])];
        assert!(FlagAggregator::aggregate(&SpecState::unavailable("x"), &answers).is_empty());
    }
}

use tracing::debug;

use super::{AnalyzedAnswer, Answer, AnswerAnalysis, AxisContribution};
use crate::detectors::{self, word_count, NEUTRAL_SCORE};
use crate::reference::SpecState;

const FULL_CONFIDENCE_WORDS: f32 = 50.0;

/// Routes answers to detectors and converts their output into contributions.
#[derive(Debug, Clone)]
pub struct AnswerAnalyzer {
    spec: SpecState,
}

impl AnswerAnalyzer {
    pub fn new(spec: SpecState) -> Self {
        Self { spec }
    }

    pub fn confidence(words: usize) -> f32 {
        (words as f32 / FULL_CONFIDENCE_WORDS).min(1.0)
    }

    /// Analyze one answer. Pass-through questions, blank answers and a
    /// missing reference spec all yield an empty analysis.
    pub fn analyze(&self, answer: &Answer) -> AnswerAnalysis {
        if !self.spec.is_loaded() {
            return AnswerAnalysis::empty();
        }
        let Some(route) = answer.question.route() else {
            return AnswerAnalysis::empty();
        };
        let words = word_count(&answer.text);
        if words == 0 {
            return AnswerAnalysis::empty();
        }

        let output = detectors::run(route.detector, &answer.text);

        let mut contributions = vec![AxisContribution {
            axis: route.primary_axis,
            delta: output.primary as i32 - NEUTRAL_SCORE,
            source: route.detector,
        }];
        if let (Some(axis), Some(score)) = (route.secondary_axis, output.secondary) {
            contributions.push(AxisContribution {
                axis,
                delta: score as i32 - NEUTRAL_SCORE,
                source: route.detector,
            });
        }

        let analysis = AnswerAnalysis {
            contributions,
            flags: output.flags,
            confidence: Self::confidence(words),
            word_count: words,
            detector: Some(route.detector),
            markers: output.markers,
        };
        debug!(
            "Analyzed answer {} ({}) via {}: {} contributions, {} flags, confidence {:.2}",
            answer.id,
            answer.question,
            route.detector,
            analysis.contributions.len(),
            analysis.flags.len(),
            analysis.confidence
        );
        analysis
    }

    pub fn analyze_all(&self, answers: &[Answer]) -> Vec<AnalyzedAnswer> {
        answers
            .iter()
            .map(|answer| AnalyzedAnswer {
                answer: answer.clone(),
                analysis: self.analyze(answer),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{Axis, DetectorKind, FlagCode};

    fn analyzer() -> AnswerAnalyzer {
        AnswerAnalyzer::new(SpecState::bundled())
    }

    #[test]
    fn test_confidence_scales_with_length() {
        assert_eq!(AnswerAnalyzer::confidence(0), 0.0);
        assert_eq!(AnswerAnalyzer::confidence(25), 0.5);
        assert_eq!(AnswerAnalyzer::confidence(50), 1.0);
        assert_eq!(AnswerAnalyzer::confidence(400), 1.0);
    }

    #[test]
    fn test_failure_narrative_feeds_locus_and_authority() {
        let answer = Answer::new(
            "failure_narrative",
            "I launched the product and my team missed the deadline because the budget was slashed. I own that.",
        );
        let analysis = analyzer().analyze(&answer);
        assert_eq!(analysis.detector, Some(DetectorKind::LocusAuthority));
        assert_eq!(
            analysis.contributions,
            vec![
                AxisContribution { axis: Axis::LocusOfControl, delta: 7, source: DetectorKind::LocusAuthority },
                AxisContribution { axis: Axis::LinguisticAuthority, delta: -4, source: DetectorKind::LocusAuthority },
            ]
        );
        assert!(analysis.flags.is_empty());
        assert_eq!(analysis.word_count, 18);
        assert_eq!(analysis.markers["passive"], 1);
    }

    #[test]
    fn test_client_objection_feeds_operational_congruence() {
        let answer = Answer::new("client_objection", "Maybe they were right, you know?");
        let analysis = analyzer().analyze(&answer);
        let axes: Vec<Axis> = analysis.contributions.iter().map(|c| c.axis).collect();
        assert_eq!(axes, vec![Axis::LocusOfControl, Axis::OperationalCongruence]);
        assert!(analysis.flags.contains(&FlagCode::LocusExternal));
        assert!(analysis.flags.contains(&FlagCode::FrameStatusBeta));
    }

    #[test]
    fn test_motivation_contribution() {
        let answer = Answer::new(
            "ninety_day_goal",
            "I want to grow revenue, build a team, launch a course and scale ads while I stop discounting.",
        );
        let analysis = analyzer().analyze(&answer);
        assert_eq!(analysis.contributions.len(), 1);
        assert_eq!(analysis.contributions[0].axis, Axis::MotivationDirection);
        assert_eq!(analysis.contributions[0].delta, 32);
    }

    #[test]
    fn test_pass_through_and_blank_answers() {
        let a = analyzer();
        assert!(a.analyze(&Answer::new("name", "Jordan Reyes")).is_empty());
        assert!(a.analyze(&Answer::new("mystery_question", "I grow things")).is_empty());
        assert!(a.analyze(&Answer::new("why_now", "   ")).is_empty());
    }

    #[test]
    fn test_degraded_spec_yields_empty_analysis() {
        let a = AnswerAnalyzer::new(SpecState::unavailable("missing bundle"));
        let analysis = a.analyze(&Answer::new("why_now", "We need to grow and expand fast"));
        assert_eq!(analysis, AnswerAnalysis::empty());
    }

    #[test]
    fn test_analyze_all_keeps_answers_untouched() {
        let answers = vec![
            Answer::new("name", "Sam").with_id("a1"),
            Answer::new("sales_process", "First I call, then I send terms.").with_id("a2"),
        ];
        let analyzed = analyzer().analyze_all(&answers);
        assert_eq!(analyzed.len(), 2);
        assert_eq!(analyzed[0].answer, answers[0]);
        assert_eq!(analyzed[1].answer.id, "a2");
        assert_eq!(analyzed[1].analysis.detector, Some(DetectorKind::ProcessClarity));
    }
}

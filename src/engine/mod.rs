//! Frame Analysis Engine
//!
//! Runs the full pipeline for a session: answer analysis, then axis and
//! flag aggregation, then classification and integrity. Pure and
//! synchronous; the only state is the injected reference spec.

mod metrics;
mod session;

pub use metrics::IntakeMetrics;
pub use session::{parse_self_rating, IntakeSession};

use chrono::Utc;
use tracing::info;

use crate::analysis::{AnalyzedAnswer, Answer, AnswerAnalysis, AnswerAnalyzer};
use crate::reference::SpecState;
use crate::scoring::{
    has_contributions, overall_score, AxisAggregator, FlagAggregator, FrameType, IntegrityTier,
};

#[derive(Debug, Clone)]
pub struct FrameEngine {
    spec: SpecState,
    analyzer: AnswerAnalyzer,
}

impl FrameEngine {
    pub fn new(spec: SpecState) -> Self {
        Self {
            analyzer: AnswerAnalyzer::new(spec.clone()),
            spec,
        }
    }

    /// Engine backed by the reference bundle compiled into the crate.
    pub fn bundled() -> Self {
        Self::new(SpecState::bundled())
    }

    pub fn spec(&self) -> &SpecState {
        &self.spec
    }

    pub fn analyze(&self, answer: &Answer) -> AnswerAnalysis {
        self.analyzer.analyze(answer)
    }

    pub fn analyze_session(&self, session: &IntakeSession) -> Vec<AnalyzedAnswer> {
        self.analyzer.analyze_all(&session.answers)
    }

    /// Recompute metrics for a whole session from scratch.
    pub fn compute(&self, session: &IntakeSession) -> IntakeMetrics {
        let analyzed = self.analyze_session(session);
        self.compute_from_analyzed(&analyzed, session.self_rating())
    }

    pub fn compute_from_analyzed(
        &self,
        analyzed: &[AnalyzedAnswer],
        self_rating: Option<f64>,
    ) -> IntakeMetrics {
        let spec_loaded = self.spec.is_loaded();
        let contributed = has_contributions(analyzed);

        let axis_scores = AxisAggregator::aggregate(&self.spec, analyzed);
        let active_flags = FlagAggregator::aggregate(&self.spec, analyzed);
        let frame_type = FrameType::classify(&axis_scores);
        let integrity = IntegrityTier::assess(spec_loaded, contributed, &axis_scores);
        let engine_score = overall_score(&axis_scores);

        let metrics = IntakeMetrics {
            axis_scores,
            active_flags,
            overall_score: engine_score,
            engine_score,
            external_score: None,
            frame_type,
            integrity,
            analysis_available: spec_loaded && contributed,
            self_rating,
            computed_at: Utc::now(),
        };
        info!(
            "Computed intake metrics over {} answers: {}",
            analyzed.len(),
            metrics.summary()
        );
        metrics
    }
}

impl Default for FrameEngine {
    fn default() -> Self {
        Self::bundled()
    }
}

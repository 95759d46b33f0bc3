//! Answer Analysis
//!
//! Turns one free-text answer into axis contributions, candidate flags and
//! a confidence value, by routing it to the detector its question calls for.

mod analyzer;
mod question;

pub use analyzer::AnswerAnalyzer;
pub use question::{QuestionId, Route};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reference::{Axis, DetectorKind, FlagCode};

fn new_answer_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// One free-text response. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default = "new_answer_id")]
    pub id: String,
    pub question: QuestionId,
    #[serde(default)]
    pub text: String,
}

impl Answer {
    pub fn new(question: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            id: new_answer_id(),
            question: question.into(),
            text: text.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// A signed delta from the neutral baseline, applied to one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisContribution {
    pub axis: Axis,
    pub delta: i32,
    pub source: DetectorKind,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub contributions: Vec<AxisContribution>,
    pub flags: Vec<FlagCode>,
    /// 0.0 - 1.0, linear in word count up to 50 words.
    pub confidence: f32,
    pub word_count: usize,
    pub detector: Option<DetectorKind>,
    /// Marker counts behind the scores, for explanation.
    #[serde(default)]
    pub markers: BTreeMap<String, usize>,
}

impl AnswerAnalysis {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty() && self.flags.is_empty()
    }
}

/// An answer paired with its most recent analysis. Re-analysis builds a new
/// value rather than editing this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedAnswer {
    pub answer: Answer,
    pub analysis: AnswerAnalysis,
}

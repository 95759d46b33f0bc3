//! Frame Analysis Engine
//!
//! Turns free-text intake answers into a structured profile:
//! - Pattern detectors over raw answer text
//! - Axis scores with derived composite axes
//! - Active behavioral flags with evidence
//! - A frame type label and a data-quality (integrity) tier
//!
//! Deterministic and explainable; reference data is injected, never global.

pub mod analysis;
pub mod config;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod reference;
pub mod scoring;

// Re-exports for convenience
pub use analysis::{AnalyzedAnswer, Answer, AnswerAnalysis, AxisContribution, QuestionId};
pub use config::EngineConfig;
pub use engine::{FrameEngine, IntakeMetrics, IntakeSession};
pub use error::{FrameError, Result};
pub use reference::{Axis, FlagCode, ReferenceSpec, Severity, SpecState};
pub use scoring::{ActiveFlag, AxisScores, FrameType, IntegrityTier};

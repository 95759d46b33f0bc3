//! Pattern Detectors
//!
//! Stateless scanners over one answer's raw text. Each returns sub-scores on
//! a 0-100 scale anchored at 50, candidate flags, and the marker counts the
//! scores were computed from.

pub mod lexicon;
pub mod locus;
pub mod motivation;
pub mod process;

pub use lexicon::{word_count, Lexicon};
pub use locus::{LocusAuthorityDetector, LocusCounts};
pub use motivation::{MotivationCounts, MotivationDetector};
pub use process::{ProcessCounts, ProcessDetector};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reference::{DetectorKind, FlagCode};

pub const NEUTRAL_SCORE: i32 = 50;

pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Uniform view of a detector run, as consumed by the answer analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorOutput {
    pub detector: DetectorKind,
    /// Locus, motivation or process score depending on the detector.
    pub primary: u8,
    /// Authority score; only the locus/authority detector produces one.
    pub secondary: Option<u8>,
    pub flags: Vec<FlagCode>,
    pub markers: BTreeMap<String, usize>,
}

/// Run the detector of the given kind over `text`.
pub fn run(kind: DetectorKind, text: &str) -> DetectorOutput {
    match kind {
        DetectorKind::LocusAuthority => LocusAuthorityDetector::detect(text).into(),
        DetectorKind::Motivation => MotivationDetector::detect(text).into(),
        DetectorKind::ProcessClarity => ProcessDetector::detect(text).into(),
    }
}

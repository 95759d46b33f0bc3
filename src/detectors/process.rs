//! Process-clarity detector
//!
//! A clear process reads as ordered steps built on concrete verbs. Vague or
//! conditional language, and commitments phrased as attempts, count against
//! it.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lexicon::{normalize, Lexicon};
use super::{clamp_score, DetectorOutput, NEUTRAL_SCORE};
use crate::reference::{DetectorKind, FlagCode};

lazy_static! {
    static ref SEQUENTIAL: Lexicon = Lexicon::new(&[
        "first", "firstly", "second", "secondly", "third", "thirdly", "then",
        "next", "after that", "afterwards", "finally", "lastly", "step",
        "steps", "once", "followed by", "stage", "phase",
    ]);
    static ref ACTION_VERBS: Lexicon = Lexicon::new(&[
        "call", "email", "send", "book", "schedule", "qualify", "pitch",
        "present", "close", "follow up", "onboard", "invoice", "demo", "ask",
        "review", "audit", "deliver", "propose", "sign", "map", "diagnose",
        "prescribe",
    ]);
    static ref CONDITIONAL: Lexicon = Lexicon::new(&[
        "if", "maybe", "it depends", "depends", "sometimes", "usually",
        "might", "could", "kind of", "sort of", "whatever", "hopefully",
        "probably", "case by case", "wing it", "figure it out", "feel it out",
    ]);
    static ref SOFT_COMMITMENT: Lexicon = Lexicon::new(&[
        "try", "trying", "hope to", "hoping to", "aim to", "attempt",
        "should probably", "see what happens", "i'll see",
    ]);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCounts {
    pub sequential: usize,
    pub action_verbs: usize,
    pub conditional: usize,
    pub soft_commitment: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessReading {
    pub counts: ProcessCounts,
    pub score: u8,
    pub flags: Vec<FlagCode>,
}

pub struct ProcessDetector;

impl ProcessDetector {
    pub fn count(text: &str) -> ProcessCounts {
        let text = normalize(text);
        ProcessCounts {
            sequential: SEQUENTIAL.count(&text),
            action_verbs: ACTION_VERBS.count(&text),
            conditional: CONDITIONAL.count(&text),
            soft_commitment: SOFT_COMMITMENT.count(&text),
        }
    }

    pub fn detect(text: &str) -> ProcessReading {
        Self::score(Self::count(text))
    }

    pub fn score(counts: ProcessCounts) -> ProcessReading {
        let score = clamp_score(
            NEUTRAL_SCORE + 10 * counts.sequential as i32 + 5 * counts.action_verbs as i32
                - 8 * counts.conditional as i32,
        );

        let mut flags = Vec::new();
        if counts.conditional >= 3 || (counts.sequential == 0 && counts.action_verbs < 2) {
            flags.push(FlagCode::GapDetected);
        }
        if counts.soft_commitment > 0 {
            flags.push(FlagCode::CommitmentSoft);
        }

        ProcessReading {
            counts,
            score,
            flags,
        }
    }
}

impl From<ProcessReading> for DetectorOutput {
    fn from(reading: ProcessReading) -> Self {
        let c = reading.counts;
        DetectorOutput {
            detector: DetectorKind::ProcessClarity,
            primary: reading.score,
            secondary: None,
            flags: reading.flags,
            markers: BTreeMap::from([
                ("sequential".to_string(), c.sequential),
                ("action_verbs".to_string(), c.action_verbs),
                ("conditional".to_string(), c.conditional),
                ("soft_commitment".to_string(), c.soft_commitment),
            ]),
        }
    }
}

//! Locus / Authority detector
//!
//! Who the speaker credits for outcomes (self vs. outside forces), and how
//! much they undercut their own statements with passive voice, hedges and
//! approval-seeking tag questions.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::lexicon::{normalize, Lexicon};
use super::{clamp_score, DetectorOutput, NEUTRAL_SCORE};
use crate::reference::{DetectorKind, FlagCode};

lazy_static! {
    static ref FIRST_PERSON: Lexicon = Lexicon::new(&[
        "i", "i'm", "i've", "i'll", "i'd", "me", "my", "mine", "myself",
        "we", "we're", "we've", "we'll", "us", "our", "ours", "ourselves",
    ]);
    static ref EXTERNAL: Lexicon = Lexicon::new(&[
        "they", "them", "their", "luck", "lucky", "unlucky", "unfortunately",
        "the market", "the economy", "economy", "circumstances", "bad timing",
        "timing", "the algorithm", "competitors", "competition", "fate",
        "out of my control", "out of our control", "happened to", "nobody",
        "everyone else",
    ]);
    static ref PASSIVE: Regex = Regex::new(
        r"(?i)\b(?:am|is|are|was|were|be|been|being|got|get|gets|getting)\s+(\w+ed|given|taken|made|told|left|let|sent|held|kept|put|caught|brought|thrown|shown|seen|known|done|forgotten|overlooked)\b"
    )
    .unwrap();
    /// "-ed" words that follow a be-verb as a state of the speaker, not an
    /// action done to them.
    static ref PREDICATE_ADJECTIVES: HashSet<&'static str> = [
        "excited", "focused", "determined", "interested", "motivated",
        "committed", "dedicated", "prepared", "tired", "worried", "scared",
        "frustrated", "bored", "pleased", "satisfied", "qualified",
        "experienced", "skilled", "talented", "organized", "organised",
        "inspired", "thrilled", "stressed", "overwhelmed", "confused",
        "surprised", "disappointed", "convinced", "obsessed", "energized",
        "relaxed", "confident", "booked", "aligned", "invested", "based",
        "involved", "connected", "embarrassed", "ashamed", "exhausted",
    ]
    .into_iter()
    .collect();
    static ref HEDGES: Lexicon = Lexicon::new(&[
        "maybe", "perhaps", "probably", "possibly", "kind of", "sort of",
        "i think", "i guess", "i feel like", "i suppose", "somewhat",
        "might", "a bit", "a little", "not sure", "hopefully",
    ]);
    static ref TAG_QUESTIONS: Lexicon = Lexicon::from_pattern(
        r"(?i)\b(?:right|correct|ok|okay|isn't it|aren't they|don't you think|wouldn't you say|you know|does that make sense|make sense|doesn't it|won't it)\s*\?"
    );
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocusCounts {
    pub first_person: usize,
    pub external: usize,
    pub passive: usize,
    pub hedges: usize,
    pub tag_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocusReading {
    pub counts: LocusCounts,
    pub locus: u8,
    pub authority: u8,
    pub flags: Vec<FlagCode>,
}

fn count_passive(text: &str) -> usize {
    PASSIVE
        .captures_iter(text)
        .filter(|caps| !PREDICATE_ADJECTIVES.contains(caps[1].to_lowercase().as_str()))
        .count()
}

pub struct LocusAuthorityDetector;

impl LocusAuthorityDetector {
    pub fn count(text: &str) -> LocusCounts {
        let text = normalize(text);
        LocusCounts {
            first_person: FIRST_PERSON.count(&text),
            external: EXTERNAL.count(&text),
            passive: count_passive(&text),
            hedges: HEDGES.count(&text),
            tag_questions: TAG_QUESTIONS.count(&text),
        }
    }

    pub fn detect(text: &str) -> LocusReading {
        Self::score(Self::count(text))
    }

    pub fn score(counts: LocusCounts) -> LocusReading {
        let first = counts.first_person as i32;
        let external = counts.external as i32;
        let passive = counts.passive as i32;
        let hedges = counts.hedges as i32;
        let tags = counts.tag_questions as i32;

        let locus = clamp_score(NEUTRAL_SCORE + 5 * (first - external) - 8 * passive);
        let authority = clamp_score(NEUTRAL_SCORE - 6 * hedges - 4 * passive - 8 * tags);

        let mut flags = Vec::new();
        if passive >= 2 || external - first > 2 {
            flags.push(FlagCode::AgencyWarning);
        }
        if external > first {
            flags.push(FlagCode::LocusExternal);
        }
        if hedges >= 3 || tags > 0 {
            flags.push(FlagCode::FrameStatusBeta);
        }

        LocusReading {
            counts,
            locus,
            authority,
            flags,
        }
    }
}

impl From<LocusReading> for DetectorOutput {
    fn from(reading: LocusReading) -> Self {
        let c = reading.counts;
        let markers = BTreeMap::from([
            ("first_person".to_string(), c.first_person),
            ("external".to_string(), c.external),
            ("passive".to_string(), c.passive),
            ("hedges".to_string(), c.hedges),
            ("tag_questions".to_string(), c.tag_questions),
        ]);
        DetectorOutput {
            detector: DetectorKind::LocusAuthority,
            primary: reading.locus,
            secondary: Some(reading.authority),
            flags: reading.flags,
            markers,
        }
    }
}

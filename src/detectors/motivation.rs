//! Motivation-direction detector: towards (acquire, grow) vs. away (avoid,
//! reduce) vocabulary. Raises no flags.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lexicon::{normalize, Lexicon};
use super::{clamp_score, DetectorOutput, NEUTRAL_SCORE};
use crate::reference::DetectorKind;

lazy_static! {
    static ref TOWARDS: Lexicon = Lexicon::new(&[
        "grow", "growing", "grew", "build", "building", "achieve", "gain",
        "increase", "expand", "scale", "scaling", "launch", "win", "create",
        "reach", "earn", "double", "triple", "acquire", "attract", "hire",
        "land", "unlock", "hit",
    ]);
    static ref AWAY: Lexicon = Lexicon::new(&[
        "avoid", "stop", "escape", "reduce", "eliminate", "prevent",
        "get rid of", "quit", "cut", "lose", "losing", "struggle",
        "struggling", "stress", "stressed", "burnout", "fear", "worry",
        "worried", "fix", "less",
    ]);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationCounts {
    pub towards: usize,
    pub away: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotivationReading {
    pub counts: MotivationCounts,
    pub score: u8,
}

pub struct MotivationDetector;

impl MotivationDetector {
    pub fn detect(text: &str) -> MotivationReading {
        let text = normalize(text);
        Self::score(MotivationCounts {
            towards: TOWARDS.count(&text),
            away: AWAY.count(&text),
        })
    }

    pub fn score(counts: MotivationCounts) -> MotivationReading {
        let score = clamp_score(
            NEUTRAL_SCORE + 8 * counts.towards as i32 - 8 * counts.away as i32,
        );
        MotivationReading { counts, score }
    }
}

impl From<MotivationReading> for DetectorOutput {
    fn from(reading: MotivationReading) -> Self {
        DetectorOutput {
            detector: DetectorKind::Motivation,
            primary: reading.score,
            secondary: None,
            flags: Vec::new(),
            markers: BTreeMap::from([
                ("towards".to_string(), reading.counts.towards),
                ("away".to_string(), reading.counts.away),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ninety_day_goal_towards() {
        let reading = MotivationDetector::detect(
            "I want to grow revenue, build a team, launch a course and scale ads while I stop discounting.",
        );
        assert_eq!(reading.counts, MotivationCounts { towards: 4, away: 1 });
        assert_eq!(reading.score, 82);
    }

    #[test]
    fn test_away_dominant() {
        let reading = MotivationDetector::detect(
            "Mostly I need to stop the stress, avoid burnout and get rid of bad clients.",
        );
        // stop, stress, avoid, burnout, get rid of
        assert_eq!(reading.counts.away, 5);
        assert_eq!(reading.score, 10);
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(MotivationDetector::detect("Honestly not sure yet.").score, 50);
    }

    #[test]
    fn test_score_is_clamped() {
        let reading = MotivationDetector::score(MotivationCounts { towards: 10, away: 0 });
        assert_eq!(reading.score, 100);
    }
}

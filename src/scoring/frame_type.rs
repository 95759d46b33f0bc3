use serde::{Deserialize, Serialize};
use std::fmt;

use super::AxisScores;
use crate::reference::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameType {
    Power,
    Supplicant,
    Analyst,
    Mixed,
}

impl FrameType {
    /// Ordered decision list over frame strength and linguistic authority;
    /// the first matching arm wins.
    pub fn classify(scores: &AxisScores) -> Self {
        Self::from_scores(
            scores.get(Axis::FrameStrength),
            scores.get(Axis::LinguisticAuthority),
        )
    }

    pub fn from_scores(frame_strength: u8, authority: u8) -> Self {
        match (frame_strength, authority) {
            (fs, la) if fs >= 65 && la >= 60 => FrameType::Power,
            (fs, la) if fs < 40 || la < 40 => FrameType::Supplicant,
            (_, la) if la >= 50 => FrameType::Analyst,
            _ => FrameType::Mixed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrameType::Power => "power",
            FrameType::Supplicant => "supplicant",
            FrameType::Analyst => "analyst",
            FrameType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        assert_eq!(FrameType::from_scores(70, 65), FrameType::Power);
        assert_eq!(FrameType::from_scores(65, 60), FrameType::Power);
        assert_eq!(FrameType::from_scores(80, 39), FrameType::Supplicant);
        assert_eq!(FrameType::from_scores(39, 90), FrameType::Supplicant);
        assert_eq!(FrameType::from_scores(64, 59), FrameType::Analyst);
        assert_eq!(FrameType::from_scores(90, 55), FrameType::Analyst);
        assert_eq!(FrameType::from_scores(60, 45), FrameType::Mixed);
    }

    #[test]
    fn test_total_over_score_grid() {
        for fs in 0..=100u8 {
            for la in 0..=100u8 {
                let label = FrameType::from_scores(fs, la);
                let expected = if fs >= 65 && la >= 60 {
                    FrameType::Power
                } else if fs < 40 || la < 40 {
                    FrameType::Supplicant
                } else if la >= 50 {
                    FrameType::Analyst
                } else {
                    FrameType::Mixed
                };
                assert_eq!(label, expected, "fs={} la={}", fs, la);
            }
        }
    }

    #[test]
    fn test_all_zero_is_supplicant() {
        assert_eq!(FrameType::classify(&AxisScores::zeroed()), FrameType::Supplicant);
        assert_eq!(FrameType::classify(&AxisScores::neutral()), FrameType::Analyst);
    }
}

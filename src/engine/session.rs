use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::Answer;

const MIN_SELF_RATING: f64 = 1.0;
const MAX_SELF_RATING: f64 = 10.0;

/// An ordered set of answers plus the respondent's self-rating, exactly as
/// the intake flow captured them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeSession {
    #[serde(default)]
    pub answers: Vec<Answer>,
    /// Raw value; only numbers (or numeric strings) in 1-10 are honoured.
    #[serde(default)]
    pub self_rating: Option<Value>,
}

impl IntakeSession {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            self_rating: None,
        }
    }

    pub fn with_self_rating(mut self, rating: impl Into<Value>) -> Self {
        self.self_rating = Some(rating.into());
        self
    }

    pub fn self_rating(&self) -> Option<f64> {
        self.self_rating.as_ref().and_then(parse_self_rating)
    }
}

pub fn parse_self_rating(raw: &Value) -> Option<f64> {
    let rating = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (rating.is_finite() && (MIN_SELF_RATING..=MAX_SELF_RATING).contains(&rating)).then_some(rating)
}

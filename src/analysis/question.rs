use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference::{Axis, DetectorKind};

/// Identity of an intake question. Unknown ids are kept verbatim and
/// treated as pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionId {
    Name,
    BusinessContext,
    OfferDescription,
    FailureNarrative,
    SuccessNarrative,
    ClientObjection,
    NinetyDayGoal,
    WhyNow,
    SalesProcess,
    Other(String),
}

/// Which detector a question feeds and where its sub-scores land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub detector: DetectorKind,
    pub primary_axis: Axis,
    /// Target of the detector's secondary (authority) score, if any.
    pub secondary_axis: Option<Axis>,
}

impl QuestionId {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionId::Name => "name",
            QuestionId::BusinessContext => "business_context",
            QuestionId::OfferDescription => "offer_description",
            QuestionId::FailureNarrative => "failure_narrative",
            QuestionId::SuccessNarrative => "success_narrative",
            QuestionId::ClientObjection => "client_objection",
            QuestionId::NinetyDayGoal => "ninety_day_goal",
            QuestionId::WhyNow => "why_now",
            QuestionId::SalesProcess => "sales_process",
            QuestionId::Other(id) => id,
        }
    }

    /// `None` means identity/context only: nothing is analyzed.
    pub fn route(&self) -> Option<Route> {
        let route = |detector, primary_axis, secondary_axis| {
            Some(Route {
                detector,
                primary_axis,
                secondary_axis,
            })
        };
        match self {
            QuestionId::FailureNarrative | QuestionId::SuccessNarrative => route(
                DetectorKind::LocusAuthority,
                Axis::LocusOfControl,
                Some(Axis::LinguisticAuthority),
            ),
            QuestionId::ClientObjection => route(
                DetectorKind::LocusAuthority,
                Axis::LocusOfControl,
                Some(Axis::OperationalCongruence),
            ),
            QuestionId::NinetyDayGoal | QuestionId::WhyNow => {
                route(DetectorKind::Motivation, Axis::MotivationDirection, None)
            }
            QuestionId::SalesProcess => {
                route(DetectorKind::ProcessClarity, Axis::ProcessClarity, None)
            }
            QuestionId::Name
            | QuestionId::BusinessContext
            | QuestionId::OfferDescription
            | QuestionId::Other(_) => None,
        }
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        match id.as_str() {
            "name" => QuestionId::Name,
            "business_context" => QuestionId::BusinessContext,
            "offer_description" => QuestionId::OfferDescription,
            "failure_narrative" => QuestionId::FailureNarrative,
            "success_narrative" => QuestionId::SuccessNarrative,
            "client_objection" => QuestionId::ClientObjection,
            "ninety_day_goal" => QuestionId::NinetyDayGoal,
            "why_now" => QuestionId::WhyNow,
            "sales_process" => QuestionId::SalesProcess,
            _ => QuestionId::Other(id),
        }
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        QuestionId::from(id.to_string())
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.as_str().to_string()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

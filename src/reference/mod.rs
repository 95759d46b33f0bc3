//! Reference Spec
//!
//! The static vocabulary the engine scores against: axes, flags with their
//! severities, and detector metadata. Loaded once and shared read-only.

mod bundle;
mod loader;

pub use bundle::{AxisInfo, DetectorInfo, FlagDefinition, ReferenceSpec};
pub use loader::SpecState;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One dimension of the behavioral profile, scored 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    LocusOfControl,
    MotivationDirection,
    ProcessClarity,
    LinguisticAuthority,
    PricingConfidence,
    StatusFrame,
    BoundaryControl,
    OperationalCongruence,
    FrameStrength,
}

impl Axis {
    pub const ALL: [Axis; 9] = [
        Axis::LocusOfControl,
        Axis::MotivationDirection,
        Axis::ProcessClarity,
        Axis::LinguisticAuthority,
        Axis::PricingConfidence,
        Axis::StatusFrame,
        Axis::BoundaryControl,
        Axis::OperationalCongruence,
        Axis::FrameStrength,
    ];

    /// Tier-1 axes: the overall score and the integrity tier read only these.
    pub const KEY: [Axis; 4] = [
        Axis::LocusOfControl,
        Axis::MotivationDirection,
        Axis::ProcessClarity,
        Axis::LinguisticAuthority,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Axis::LocusOfControl => "locus_of_control",
            Axis::MotivationDirection => "motivation_direction",
            Axis::ProcessClarity => "process_clarity",
            Axis::LinguisticAuthority => "linguistic_authority",
            Axis::PricingConfidence => "pricing_confidence",
            Axis::StatusFrame => "status_frame",
            Axis::BoundaryControl => "boundary_control",
            Axis::OperationalCongruence => "operational_congruence",
            Axis::FrameStrength => "frame_strength",
        }
    }

    /// Derived axes are recomputed from primary axes after aggregation.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            Axis::StatusFrame
                | Axis::BoundaryControl
                | Axis::OperationalCongruence
                | Axis::FrameStrength
        )
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Critical,
}

/// A discrete behavioral signal a detector can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCode {
    AgencyWarning,
    LocusExternal,
    FrameStatusBeta,
    GapDetected,
    CommitmentSoft,
}

impl FlagCode {
    pub fn code(&self) -> &'static str {
        match self {
            FlagCode::AgencyWarning => "agency_warning",
            FlagCode::LocusExternal => "locus_external",
            FlagCode::FrameStatusBeta => "frame_status_beta",
            FlagCode::GapDetected => "gap_detected",
            FlagCode::CommitmentSoft => "commitment_soft",
        }
    }
}

impl fmt::Display for FlagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FlagCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agency_warning" => Ok(FlagCode::AgencyWarning),
            "locus_external" => Ok(FlagCode::LocusExternal),
            "frame_status_beta" => Ok(FlagCode::FrameStatusBeta),
            "gap_detected" => Ok(FlagCode::GapDetected),
            "commitment_soft" => Ok(FlagCode::CommitmentSoft),
            other => Err(format!("unknown flag code '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    LocusAuthority,
    Motivation,
    ProcessClarity,
}

impl DetectorKind {
    pub fn label(&self) -> &'static str {
        match self {
            DetectorKind::LocusAuthority => "locus_authority",
            DetectorKind::Motivation => "motivation",
            DetectorKind::ProcessClarity => "process_clarity",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Scoring
//!
//! Session-level aggregation: axis scores, active flags, the frame type
//! label, the overall score and its integrity tier.

mod axes;
mod flags;
mod frame_type;
mod integrity;

pub use axes::{has_contributions, AxisAggregator, AxisScores};
pub use flags::{flag_confidence, ActiveFlag, FlagAggregator};
pub use frame_type::FrameType;
pub use integrity::{deviating_key_axes, merge_scores, overall_score, IntegrityTier};

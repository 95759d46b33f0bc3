use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use super::ReferenceSpec;
use crate::error::Result;

/// Whether reference data is available to the engine.
///
/// A failed load never surfaces as an error to callers; it yields
/// `Unavailable`, which every scoring stage treats as the degraded mode.
#[derive(Debug, Clone)]
pub enum SpecState {
    Loaded(Arc<ReferenceSpec>),
    Unavailable { reason: String },
}

impl SpecState {
    pub fn from_result(result: Result<ReferenceSpec>) -> Self {
        match result {
            Ok(spec) => {
                info!(
                    "Reference spec v{} loaded: {} axes, {} flags",
                    spec.version,
                    spec.axes.len(),
                    spec.flags.len()
                );
                SpecState::Loaded(Arc::new(spec))
            }
            Err(e) => {
                warn!("Reference spec unavailable, engine running degraded: {}", e);
                SpecState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn bundled() -> Self {
        Self::from_result(ReferenceSpec::bundled())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        SpecState::Unavailable {
            reason: reason.into(),
        }
    }

    /// Read a YAML bundle from disk, or the bundled default when no path is
    /// configured.
    pub async fn load(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::from_result(Self::read_bundle(p).await),
            None => Self::bundled(),
        }
    }

    async fn read_bundle(path: &Path) -> Result<ReferenceSpec> {
        let content = tokio::fs::read_to_string(path).await?;
        ReferenceSpec::from_yaml_str(&content)
    }

    pub fn spec(&self) -> Option<&ReferenceSpec> {
        match self {
            SpecState::Loaded(spec) => Some(spec),
            SpecState::Unavailable { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SpecState::Loaded(_))
    }
}

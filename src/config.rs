//! Configuration
//!
//! Read from the process environment; a `.env` file is honoured when the
//! binary starts.

use std::path::PathBuf;

pub const SPEC_PATH_VAR: &str = "FRAME_SPEC_PATH";
pub const LOG_LEVEL_VAR: &str = "FRAME_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// YAML reference bundle; the bundled default is used when unset.
    pub spec_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spec_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            spec_path: non_empty(SPEC_PATH_VAR).map(PathBuf::from),
            log_level: non_empty(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
        }
    }
}

//! Error Types
//!
//! Only the edges of the engine can fail: reading and validating the
//! reference bundle, and decoding a session file. Scoring itself is total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("failed to read reference bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse reference bundle: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid reference bundle: {0}")]
    InvalidSpec(String),

    #[error("failed to decode session: {0}")]
    Session(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;

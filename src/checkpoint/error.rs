//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while exporting or restoring a session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed, including rejected tile sets or codes
    #[error("JSON checkpoint error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary checkpoint error: {0}")]
    Binary(#[from] bincode::Error),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded fine, but describes a session the machine could never reach
    #[error("Checkpoint state is inconsistent: {}", .0.join("; "))]
    Inconsistent(Vec<String>),
}

//! Timeline Errors
//!
//! None of these are fatal: callers log them and keep the page running.

use thiserror::Error;

/// Common result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Error, Debug)]
pub enum TimelineError {
    /// The key-value backend could not be reached or rejected a write.
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// The collection could not be serialized.
    #[error("failed to encode milestones: {0}")]
    Encode(#[from] serde_json::Error),

    /// Delete was requested for a draft that is not an existing milestone.
    #[error("delete requires an existing milestone in edit mode")]
    DeleteUnavailable,
}

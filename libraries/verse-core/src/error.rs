/// Core error types for Verse Player
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Verse Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// A catalog entry failed validation
    #[error("Invalid track at index {index}: {reason}")]
    InvalidTrack {
        /// Position of the rejected entry in the supplied track list
        index: usize,
        /// Human-readable description of the validation failure
        reason: String,
    },
}

impl CoreError {
    /// Create an invalid track error
    pub fn invalid_track(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidTrack {
            index,
            reason: reason.into(),
        }
    }
}

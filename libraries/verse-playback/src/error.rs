//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The catalog has no tracks to play
    #[error("Catalog has no tracks")]
    EmptyCatalog,

    /// Requested track index outside the catalog
    #[error("Track index {index} out of range (catalog has {track_count} tracks)")]
    IndexOutOfRange {
        /// The index a caller asked for
        index: usize,
        /// Catalog size at the time of the request
        track_count: usize,
    },

    /// The audio device rejected a load/play request
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// A caller supplied a value outside its documented domain
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

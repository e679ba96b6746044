/// Track domain type
use serde::{Deserialize, Serialize};

/// An immutable audio track record.
///
/// Tracks carry no identifier of their own; a track's identity is its
/// position in the [`Catalog`](crate::Catalog) it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Locator handed to the audio device (file path, URL, asset key)
    pub source_locator: String,

    /// Declared track duration in seconds
    pub duration_secs: f64,
}

impl Track {
    /// Create a new track
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        source_locator: impl Into<String>,
        duration_secs: f64,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            source_locator: source_locator.into(),
            duration_secs,
        }
    }

    /// Check the record for fields a playable track must have.
    ///
    /// Returns the first problem found, or `None` for a well-formed track.
    pub(crate) fn validation_error(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("missing title")
        } else if self.artist.trim().is_empty() {
            Some("missing artist")
        } else if self.source_locator.trim().is_empty() {
            Some("missing source locator")
        } else if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            Some("duration must be a positive number of seconds")
        } else {
            None
        }
    }
}

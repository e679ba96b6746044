/// Catalog domain type
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::Track;

/// A fixed, ordered sequence of tracks for one playback session.
///
/// The catalog is set once at construction and never mutated afterwards;
/// track identity throughout the player is the index into this sequence.
/// An empty catalog is legal — the playback engine reports it as an
/// explicit "no tracks" condition when commands require one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, validating every entry.
    ///
    /// Rejects tracks with a blank title, artist, or source locator, or a
    /// non-positive/non-finite duration.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        for (index, track) in tracks.iter().enumerate() {
            if let Some(reason) = track.validation_error() {
                return Err(CoreError::invalid_track(index, reason));
            }
        }
        Ok(Self { tracks })
    }

    /// Create a catalog with no tracks
    pub fn empty() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Number of tracks in the catalog
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check whether the catalog has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get the track at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

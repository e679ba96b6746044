//! Playback events
//!
//! Event-based communication for presentation synchronization. The engine
//! pushes an event after every observable state change; the presentation
//! layer drains them and repaints whatever they describe. Events are
//! snapshots, not deltas — applying one twice paints the same picture.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The session's track list is available for painting
    ///
    /// Emitted once at engine construction; the catalog never changes
    /// within a session.
    TrackListChanged {
        /// Number of tracks in the catalog
        track_count: usize,
    },

    /// The now-playing readout should show a different track (or none)
    NowPlayingChanged {
        /// Catalog index of the playing track, `None` for no selection
        index: Option<usize>,
    },

    /// The play/pause control should flip its icon
    PlayPauseChanged {
        /// Whether audio is currently playing
        is_playing: bool,
    },

    /// The highlighted row in the track list changed
    ActiveTrackChanged {
        /// Catalog index of the selected track, `None` for no selection
        index: Option<usize>,
        /// Whether that track is currently playing
        is_playing: bool,
    },

    /// Progress display refresh (position and, once known, duration)
    ProgressChanged {
        /// Last device-reported position in seconds
        position_secs: f64,
        /// Last device-reported duration, `None` until metadata arrives
        duration_secs: Option<f64>,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// Current volume in [0.0, 1.0]
        volume: f32,
        /// Whether audio is muted (volume zero)
        is_muted: bool,
    },

    /// Shuffle mode toggled
    ShuffleChanged {
        /// Whether shuffle traversal is active
        enabled: bool,
    },

    /// Repeat mode toggled
    RepeatChanged {
        /// Whether the current track repeats on end
        enabled: bool,
    },

    /// The device rejected a load/play request
    ///
    /// Display-only: the selection survives and the same track can be
    /// retried.
    PlaybackFailed {
        /// Opaque detail string from the device
        detail: String,
    },
}

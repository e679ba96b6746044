//! Playback engine - core state machine
//!
//! Owns all mutable session state and mediates between caller commands,
//! asynchronous device events, and presentation notifications.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use verse_core::{Catalog, Track};

use crate::device::AudioDevice;
use crate::error::{PlaybackError, Result};
use crate::events::PlayerEvent;
use crate::sequencer;
use crate::volume::VolumeControl;

/// `previous()` restarts the current track instead of stepping back once
/// playback is this far in
const RESTART_THRESHOLD_SECS: f64 = 3.0;

/// Transport state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No track selected
    NoTrack,

    /// A play request is in flight, awaiting device acknowledgment
    Selecting,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Track selected, position reset, not playing
    Stopped,
}

/// Central playback state machine.
///
/// All session state lives here and is mutated only by the command and
/// event-handler methods. Commands return synchronously after updating
/// state and issuing at most one device request; device outcomes arrive
/// later through the `on_*` handlers. Presentation reads the resulting
/// [`PlayerEvent`] stream via [`drain_events`](PlaybackEngine::drain_events).
pub struct PlaybackEngine {
    // Collaborators
    catalog: Catalog,
    device: Box<dyn AudioDevice>,

    // Transport state
    state: EngineState,
    current_index: Option<usize>,

    // Modes
    is_shuffle: bool,
    shuffle_order: Vec<usize>,
    is_repeat: bool,

    // Volume
    volume: VolumeControl,

    // Last device-reported progress; authoritative only at the device
    position_secs: f64,
    duration_secs: Option<f64>,

    // Index of the play request awaiting acknowledgment (stale-ack gate)
    pending_play: Option<usize>,

    // Event queue for presentation synchronization
    pending_events: Vec<PlayerEvent>,

    // Shuffle-order randomness, seedable for deterministic tests
    rng: StdRng,
}

impl PlaybackEngine {
    /// Create an engine over a fixed catalog and an injected device
    pub fn new(catalog: Catalog, device: Box<dyn AudioDevice>) -> Self {
        Self::build(catalog, device, StdRng::from_entropy())
    }

    /// Create an engine with a seeded shuffle generator
    ///
    /// Shuffle orders become reproducible, which the tests rely on.
    pub fn with_seed(catalog: Catalog, device: Box<dyn AudioDevice>, seed: u64) -> Self {
        Self::build(catalog, device, StdRng::seed_from_u64(seed))
    }

    fn build(catalog: Catalog, device: Box<dyn AudioDevice>, rng: StdRng) -> Self {
        let mut engine = Self {
            catalog,
            device,
            state: EngineState::NoTrack,
            current_index: None,
            is_shuffle: false,
            shuffle_order: Vec::new(),
            is_repeat: false,
            volume: VolumeControl::new(),
            position_secs: 0.0,
            duration_secs: None,
            pending_play: None,
            pending_events: Vec::new(),
            rng,
        };

        // Hand the presentation its initial picture and push the default
        // volume to the device.
        engine.emit(PlayerEvent::TrackListChanged {
            track_count: engine.catalog.len(),
        });
        engine.push_volume_to_device();
        engine.emit_volume_changed();

        engine
    }

    // ===== Commands =====

    /// Select the track at `index` and request the device play it.
    ///
    /// The selection is made before any device interaction, and it
    /// survives a later device failure so the same track can be retried.
    pub fn select_and_play(&mut self, index: usize) -> Result<()> {
        if index >= self.catalog.len() {
            return Err(PlaybackError::IndexOutOfRange {
                index,
                track_count: self.catalog.len(),
            });
        }

        self.start_track(index);
        Ok(())
    }

    /// Toggle between playing and paused.
    ///
    /// With nothing selected this starts the catalog from the top. Pause
    /// takes effect immediately; resume waits for the device
    /// acknowledgment like any other play request.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlaybackError::EmptyCatalog);
        }

        let Some(index) = self.current_index else {
            return self.select_and_play(0);
        };

        if self.state == EngineState::Playing {
            self.pending_play = None;
            self.state = EngineState::Paused;
            self.device.pause();
            self.emit_play_pause_changed();
            self.emit_active_track_changed();
        } else {
            self.pending_play = Some(index);
            self.state = EngineState::Selecting;
            self.device.play();
        }

        Ok(())
    }

    /// Stop playback: pause the device, reset its position, and leave the
    /// selection in place
    pub fn stop(&mut self) {
        self.device.pause();
        self.device.set_position_secs(0.0);

        self.pending_play = None;
        self.position_secs = 0.0;
        self.state = match self.current_index {
            Some(_) => EngineState::Stopped,
            None => EngineState::NoTrack,
        };

        self.emit_play_pause_changed();
        self.emit_active_track_changed();
        self.emit_progress_changed();
    }

    /// Advance to the next track under the active traversal mode
    pub fn next(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlaybackError::EmptyCatalog);
        }

        let next = self.resolve_step_forward();
        self.start_track(next);
        Ok(())
    }

    /// Step back to the previous track, or restart the current one when
    /// more than three seconds in
    pub fn previous(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            return Err(PlaybackError::EmptyCatalog);
        }

        if self.current_index.is_some() && self.position_secs > RESTART_THRESHOLD_SECS {
            debug!(position = self.position_secs, "restarting current track");
            self.device.set_position_secs(0.0);
            return Ok(());
        }

        let previous = self.resolve_step_backward();
        self.start_track(previous);
        Ok(())
    }

    /// Toggle shuffle traversal, regenerating the order when enabling.
    ///
    /// The order left behind when shuffle turns off is never consulted
    /// again; re-enabling always generates a fresh permutation.
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffle = !self.is_shuffle;

        if self.is_shuffle {
            self.shuffle_order =
                sequencer::generate_shuffle_order(self.catalog.len(), &mut self.rng);
            debug!(order = ?self.shuffle_order, "shuffle enabled");
        }

        self.emit(PlayerEvent::ShuffleChanged {
            enabled: self.is_shuffle,
        });
    }

    /// Toggle repeat-current-track mode
    pub fn toggle_repeat(&mut self) {
        self.is_repeat = !self.is_repeat;
        self.emit(PlayerEvent::RepeatChanged {
            enabled: self.is_repeat,
        });
    }

    /// Set the volume from a percentage (0-100)
    pub fn set_volume(&mut self, percent: u8) -> Result<()> {
        if percent > 100 {
            return Err(PlaybackError::InvalidConfiguration(format!(
                "volume percent out of range: {percent}"
            )));
        }

        self.volume.set_percent(percent);
        self.push_volume_to_device();
        self.emit_volume_changed();
        Ok(())
    }

    /// Nudge the volume by a signed percentage, clamping at 0 and 100
    pub fn step_volume(&mut self, delta_percent: i8) -> Result<()> {
        let current = (self.volume.volume() * 100.0).round() as i32;
        let next = (current + i32::from(delta_percent)).clamp(0, 100);
        self.set_volume(next as u8)
    }

    /// Toggle between silent and the remembered pre-mute volume
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.push_volume_to_device();
        self.emit_volume_changed();
    }

    /// Request a seek to `percent` (0-100) of the track duration.
    ///
    /// A no-op while the device has not yet reported a duration.
    pub fn seek(&mut self, percent: f64) -> Result<()> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(PlaybackError::InvalidConfiguration(format!(
                "seek percent out of range: {percent}"
            )));
        }

        let Some(duration) = self.duration_secs else {
            return Ok(());
        };

        self.device.set_position_secs(percent / 100.0 * duration);
        Ok(())
    }

    // ===== Device event handlers =====

    /// The device reported its playback position and duration
    pub fn on_position_update(&mut self, position_secs: f64, duration_secs: f64) {
        self.position_secs = position_secs;
        if duration_secs.is_finite() && duration_secs > 0.0 {
            self.duration_secs = Some(duration_secs);
        }
        self.emit_progress_changed();
    }

    /// The current track played to its end
    pub fn on_ended(&mut self) {
        if self.is_repeat {
            // Replay the same selection; no sequencing involved.
            let Some(index) = self.current_index else {
                return;
            };
            self.device.set_position_secs(0.0);
            self.pending_play = Some(index);
            self.state = EngineState::Selecting;
            self.device.play();
        } else if !self.catalog.is_empty() {
            let next = self.resolve_step_forward();
            self.start_track(next);
        }
    }

    /// The device confirmed a play request for the track at `index`.
    ///
    /// Acknowledgments that no longer match the pending request and the
    /// current selection are discarded: a newer `select_and_play` has
    /// superseded them and they must not mark the wrong track as playing.
    pub fn on_play_acknowledged(&mut self, index: usize) {
        if self.pending_play != Some(index) || self.current_index != Some(index) {
            warn!(
                index,
                current = ?self.current_index,
                pending = ?self.pending_play,
                "discarding stale play acknowledgment"
            );
            return;
        }

        self.pending_play = None;
        self.state = EngineState::Playing;

        self.emit(PlayerEvent::NowPlayingChanged { index: Some(index) });
        self.emit_active_track_changed();
        self.emit_play_pause_changed();
    }

    /// The device confirmed a pause request (or paused on its own)
    pub fn on_pause_acknowledged(&mut self) {
        if self.state == EngineState::Playing {
            self.state = EngineState::Paused;
        }
        self.emit_play_pause_changed();
        self.emit_active_track_changed();
    }

    /// The device learned the track duration from its metadata
    pub fn on_metadata_ready(&mut self, duration_secs: f64) {
        if duration_secs.is_finite() && duration_secs > 0.0 {
            self.duration_secs = Some(duration_secs);
        }
        self.emit_progress_changed();
    }

    /// The device rejected a load/play request or failed mid-playback.
    ///
    /// The selection is retained so the listener can retry the same
    /// track; the failure reaches the presentation as a
    /// [`PlayerEvent::PlaybackFailed`].
    pub fn on_device_error(&mut self, detail: impl Into<String>) {
        let detail = detail.into();
        warn!(detail = %detail, "device reported playback failure");

        self.pending_play = None;
        self.state = match self.current_index {
            Some(_) => EngineState::Stopped,
            None => EngineState::NoTrack,
        };

        self.emit_play_pause_changed();
        self.emit(PlayerEvent::PlaybackFailed { detail });
    }

    // ===== State queries =====

    /// Current transport state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Catalog index of the selected track, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The selected track record, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|index| self.catalog.get(index))
    }

    /// Whether audio is currently playing
    pub fn is_playing(&self) -> bool {
        self.state == EngineState::Playing
    }

    /// Whether shuffle traversal is active
    pub fn is_shuffle(&self) -> bool {
        self.is_shuffle
    }

    /// The active shuffle permutation (meaningful only while shuffle is on)
    pub fn shuffle_order(&self) -> &[usize] {
        &self.shuffle_order
    }

    /// Whether the current track repeats on end
    pub fn is_repeat(&self) -> bool {
        self.is_repeat
    }

    /// Current volume in [0.0, 1.0]
    pub fn volume(&self) -> f32 {
        self.volume.volume()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Last device-reported position in seconds
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Last device-reported duration, `None` until metadata arrives
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Number of tracks in the session catalog
    pub fn track_count(&self) -> usize {
        self.catalog.len()
    }

    // ===== Events =====

    /// Drain all pending events.
    ///
    /// Returns everything emitted since the last drain; the presentation
    /// layer applies them in order.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Select `index` and issue the load+play request.
    ///
    /// Callers have already validated `index` against the catalog.
    fn start_track(&mut self, index: usize) {
        let Some(track) = self.catalog.get(index) else {
            return;
        };
        debug!(index, title = %track.title, "selecting track");

        self.current_index = Some(index);
        self.pending_play = Some(index);
        self.state = EngineState::Selecting;
        self.position_secs = 0.0;
        self.duration_secs = None;

        self.device.load(&track.source_locator);
        self.device.play();
    }

    /// Next index under the active traversal mode; with nothing selected,
    /// enters at the first slot
    fn resolve_step_forward(&self) -> usize {
        match self.current_index {
            Some(current) => sequencer::resolve_next(
                self.catalog.len(),
                current,
                self.is_shuffle,
                &self.shuffle_order,
            ),
            None if self.is_shuffle => self.shuffle_order.first().copied().unwrap_or(0),
            None => 0,
        }
    }

    /// Previous index under the active traversal mode; with nothing
    /// selected, enters at the last slot
    fn resolve_step_backward(&self) -> usize {
        let last = self.catalog.len() - 1;
        match self.current_index {
            Some(current) => sequencer::resolve_previous(
                self.catalog.len(),
                current,
                self.is_shuffle,
                &self.shuffle_order,
            ),
            None if self.is_shuffle => self.shuffle_order.last().copied().unwrap_or(last),
            None => last,
        }
    }

    fn push_volume_to_device(&mut self) {
        let gain = self.volume.volume();
        self.device.set_device_volume(gain);
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    fn emit_play_pause_changed(&mut self) {
        let is_playing = self.is_playing();
        self.emit(PlayerEvent::PlayPauseChanged { is_playing });
    }

    fn emit_active_track_changed(&mut self) {
        let event = PlayerEvent::ActiveTrackChanged {
            index: self.current_index,
            is_playing: self.is_playing(),
        };
        self.emit(event);
    }

    fn emit_progress_changed(&mut self) {
        let event = PlayerEvent::ProgressChanged {
            position_secs: self.position_secs,
            duration_secs: self.duration_secs,
        };
        self.emit(event);
    }

    fn emit_volume_changed(&mut self) {
        let event = PlayerEvent::VolumeChanged {
            volume: self.volume.volume(),
            is_muted: self.volume.is_muted(),
        };
        self.emit(event);
    }
}

//! Verse Player - Playback State Machine
//!
//! Platform-agnostic playback sequencing and transport control for
//! Verse Player.
//!
//! This crate provides:
//! - Transport commands (select/play, play-pause, stop, next, previous)
//! - Shuffle traversal over a generated permutation
//! - Repeat-current-track mode
//! - Volume control with mute memory (0-100%, restores pre-mute level)
//! - Seek by percentage of the reported duration
//! - A pending-event queue for presentation-layer synchronization
//!
//! # Architecture
//!
//! `verse-playback` is completely platform-agnostic: it never touches an
//! audio backend or a rendering surface. The audio device is injected
//! through the [`AudioDevice`] trait and drives the engine back through
//! the `on_*` event handlers on [`PlaybackEngine`]; the presentation layer
//! drains [`PlayerEvent`]s and paints whatever they describe.
//!
//! Device requests are fire-and-forget: a command returns as soon as state
//! is updated and the request is issued, and the matching acknowledgment
//! (or failure) arrives later as a separate handler call. Acknowledgments
//! for a track that is no longer selected are discarded, so a rapid
//! select-select sequence can never mark the wrong track as playing.
//!
//! # Example
//!
//! ```rust
//! use verse_core::{Catalog, Track};
//! use verse_playback::{AudioDevice, PlaybackEngine, PlayerEvent};
//!
//! // Implement AudioDevice for your platform
//! struct MyAudioBackend;
//!
//! impl AudioDevice for MyAudioBackend {
//!     fn load(&mut self, _source_locator: &str) {}
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn set_position_secs(&mut self, _secs: f64) {}
//!     fn set_device_volume(&mut self, _gain: f32) {}
//! }
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Midnight Drive", "The Wanderers", "audio/midnight.mp3", 214.0),
//!     Track::new("Glass Houses", "Nova Lane", "audio/glass.mp3", 187.0),
//! ])?;
//!
//! let mut engine = PlaybackEngine::new(catalog, Box::new(MyAudioBackend));
//!
//! engine.select_and_play(0)?;
//! // ... the device confirms asynchronously:
//! engine.on_play_acknowledged(0);
//! assert!(engine.is_playing());
//!
//! for event in engine.drain_events() {
//!     match event {
//!         PlayerEvent::NowPlayingChanged { index } => println!("now playing {index:?}"),
//!         _ => {}
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod device;
mod engine;
mod error;
mod events;
pub mod sequencer;
mod volume;

// Public exports
pub use device::AudioDevice;
pub use engine::{EngineState, PlaybackEngine};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use volume::VolumeControl;

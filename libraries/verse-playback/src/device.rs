//! Platform-agnostic audio device boundary
//!
//! Abstracts the decoding/output backend the engine drives (HTML audio
//! element, rodio sink, embedded codec). All requests are fire-and-forget:
//! outcomes come back through the engine's `on_*` event handlers at the
//! device's own timing.

/// Platform-agnostic audio device handle.
///
/// Implementors accept transport requests and later report progress,
/// completion, and failure by calling back into
/// [`PlaybackEngine`](crate::PlaybackEngine) event handlers. The engine
/// never blocks on a request and never assumes one succeeded until the
/// matching acknowledgment arrives.
pub trait AudioDevice: Send {
    /// Load the given source so a following [`play`](AudioDevice::play)
    /// request starts it from the beginning.
    fn load(&mut self, source_locator: &str);

    /// Request playback of the loaded source. Success arrives later as
    /// `on_play_acknowledged`, failure as `on_device_error`.
    fn play(&mut self);

    /// Request that playback pause at the current position.
    fn pause(&mut self);

    /// Request a seek to an absolute position from the start of the track.
    fn set_position_secs(&mut self, secs: f64);

    /// Apply an output gain in [0.0, 1.0].
    fn set_device_volume(&mut self, gain: f32);
}

/// Inert device for unit tests: accepts every request, reports nothing.
#[cfg(test)]
pub struct NullDevice;

#[cfg(test)]
impl AudioDevice for NullDevice {
    fn load(&mut self, _source_locator: &str) {}

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn set_position_secs(&mut self, _secs: f64) {}

    fn set_device_volume(&mut self, _gain: f32) {}
}

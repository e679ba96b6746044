//! Volume control with mute memory
//!
//! Linear volume in [0.0, 1.0]. Muting is modeled as volume zero with the
//! last audible level remembered, so unmuting restores exactly what the
//! listener had before.

/// Volume restored by unmute when no audible level was ever recorded
const DEFAULT_RESTORE_VOLUME: f32 = 0.7;

/// Volume state with pre-mute memory
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Current volume (0.0 = silent/muted, 1.0 = full)
    volume: f32,

    /// Last non-zero volume, restored on unmute
    previous_before_mute: f32,
}

impl VolumeControl {
    /// Create a volume control at the default level (70%)
    pub fn new() -> Self {
        Self {
            volume: DEFAULT_RESTORE_VOLUME,
            previous_before_mute: DEFAULT_RESTORE_VOLUME,
        }
    }

    /// Set the volume from a percentage (0-100)
    ///
    /// Range checking happens at the engine boundary; this conversion
    /// assumes a validated percent.
    pub fn set_percent(&mut self, percent: u8) {
        self.volume = f32::from(percent.min(100)) / 100.0;
    }

    /// Current volume in [0.0, 1.0]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Muted means silent: volume exactly zero
    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    /// Toggle between silent and the last audible volume.
    ///
    /// Muting remembers the current level; unmuting restores it (or 70%
    /// if the volume was never audible).
    pub fn toggle_mute(&mut self) {
        if self.volume > 0.0 {
            self.previous_before_mute = self.volume;
            self.volume = 0.0;
        } else {
            self.volume = self.previous_before_mute;
        }
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new()
    }
}

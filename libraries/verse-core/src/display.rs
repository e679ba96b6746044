//! Display helpers shared by presentation surfaces

/// Format a position in seconds as `m:ss` for display.
///
/// Unknown or invalid positions (NaN, negative, infinite) render as `0:00`,
/// matching what a progress readout shows before the device has reported
/// anything.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }

    let total = secs as u64;
    let mins = total / 60;
    let rem = total % 60;
    format!("{mins}:{rem:02}")
}

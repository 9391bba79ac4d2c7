//! Duration label formatting

/// Format a duration in seconds as a zero-padded `HH:MM:SS` label.
///
/// The raw value is rounded to the nearest whole second before splitting
/// into components, so `59.6` becomes `"00:01:00"` rather than `"00:00:60"`.
/// Hours are not capped at 24. The 2-digit hour padding is load-bearing:
/// duration columns sort on this label as text, and mixed-width hours would
/// break that ordering.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

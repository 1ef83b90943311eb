//! Fixed-width rendering of time spans.

use chrono::Duration;

/// Render a span as `HH:MM:SS`.
///
/// Sub-second precision is dropped. Hours are zero-padded to two digits
/// and grow past 99 without wrapping. Negative spans render as zero: the
/// sign is carried by which derived column holds the value.
pub fn format_hms(d: Duration) -> String {
    let total = d.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

//! Timestamp formatting for the log line prefix
//!
//! Every line starts with the local wall-clock time as `HH:MM:SS.mmm`
//! (24-hour, zero-padded, three-digit milliseconds). Downstream tooling may
//! parse this prefix, so the format is fixed.

use chrono::{Local, Timelike};

/// strftime equivalent of the prefix format, for reference and for tools
/// that want to parse it back with chrono.
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Length of a formatted timestamp in bytes.
pub const TIME_LEN: usize = 12;

/// Current local time formatted for a log line prefix.
///
/// # Examples
///
/// ```
/// use scope_log::core::timestamp::{now_time, TIME_LEN};
///
/// let now = now_time();
/// assert_eq!(now.len(), TIME_LEN);
/// assert_eq!(&now[2..3], ":");
/// ```
#[must_use]
pub fn now_time() -> String {
    format_time(&Local::now())
}

/// Format any time-of-day value as `HH:MM:SS.mmm`.
///
/// A leap second (nanoseconds past one billion) keeps the millisecond field
/// within three digits.
#[must_use]
pub fn format_time<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        (time.nanosecond() / 1_000_000) % 1000
    )
}

//! Resolution and formatting of silence durations.

use chrono::{DateTime, Days, Duration, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Pattern for a relative duration: decimal digits followed by exactly one
/// unit letter, nothing else.
static DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([mhdw])$").unwrap_or_else(|_| unreachable!()));

/// Resolves a relative duration such as `1h` or `2w` against `now`,
/// returning the absolute end timestamp of a silence.
///
/// Minutes (`m`) and hours (`h`) are fixed offsets. Days (`d`) and weeks
/// (`w`, seven days) advance the calendar by whole days in `now`'s
/// timezone, so the result follows DST transitions and month/year rollover
/// the way calendar arithmetic does rather than adding a fixed number of
/// seconds.
///
/// Returns `None` for anything that is not digits followed by one of
/// `m`, `h`, `d`, `w` (no sign, no fraction, no surrounding text), and on
/// arithmetic overflow.
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use kiora_silence::silence_end;
///
/// let now = Utc::now();
/// assert_eq!(silence_end("30m", now), Some(now + Duration::minutes(30)));
/// assert_eq!(silence_end("abc", now), None);
/// ```
#[must_use]
pub fn silence_end<Tz: TimeZone>(raw: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    let Some(captures) = DURATION_REGEX.captures(raw) else {
        debug!(raw, "invalid duration");
        return None;
    };

    let amount: u64 = captures[1].parse().ok()?;

    match &captures[2] {
        "m" => now.checked_add_signed(Duration::try_minutes(i64::try_from(amount).ok()?)?),
        "h" => now.checked_add_signed(Duration::try_hours(i64::try_from(amount).ok()?)?),
        "d" => now.checked_add_days(Days::new(amount)),
        "w" => now.checked_add_days(Days::new(amount.checked_mul(7)?)),
        // Unreachable while the pattern anchors the unit letter.
        _ => None,
    }
}

/// Formats a duration in seconds into a compact human-readable string,
/// e.g. `45s`, `5m`, `3h 20m`, `2d 1h 3m`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;
    if hours < 24 {
        return format!("{hours}h {remaining_minutes}m");
    }

    let days = hours / 24;
    let remaining_hours = hours % 24;
    format!("{days}d {remaining_hours}h {remaining_minutes}m")
}

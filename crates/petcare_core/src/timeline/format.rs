//! Fixed-locale time labels for timeline rows.

use chrono::{DateTime, TimeZone, Utc};

/// Label used for events on the current day.
pub const TIME_FORMAT: &str = "%H:%M";
/// Label used for any other day, e.g. `Tue 20 Oct 14:30`.
pub const DATE_TIME_FORMAT: &str = "%a %-d %b %H:%M";

/// Formats `at` in `tz`: time only when `is_today`, otherwise weekday, day,
/// month and time.
pub fn format_event_time<Tz: TimeZone>(at: &DateTime<Utc>, is_today: bool, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = at.with_timezone(tz);
    let pattern = if is_today { TIME_FORMAT } else { DATE_TIME_FORMAT };
    local.format(pattern).to_string()
}

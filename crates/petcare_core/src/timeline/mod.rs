//! Event categorization for the timeline tabs.
//!
//! # Responsibility
//! - Decide which events each timeline tab shows.
//! - Count tab contents and derive each event's primary bucket.
//!
//! # Invariants
//! - A done event is never listed under `today` or `upcoming`.
//! - An open event is never listed under `completed`.
//! - `today` is a local calendar-day match, `upcoming` is strictly after `now`.
//!   An open event earlier today therefore stays in `today` while being
//!   excluded from `upcoming`.
//! - Categorization preserves input order and never mutates events.

mod format;

pub use format::{format_event_time, DATE_TIME_FORMAT, TIME_FORMAT};

use crate::model::event::Event;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Timeline tab selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventRange {
    #[default]
    Today,
    Upcoming,
    Completed,
}

impl EventRange {
    /// Tabs in display order.
    pub const ALL: [EventRange; 3] = [Self::Today, Self::Upcoming, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

impl Display for EventRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventRangeError(pub String);

impl Display for ParseEventRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown event range `{}`; expected today|upcoming|completed",
            self.0
        )
    }
}

impl Error for ParseEventRangeError {}

impl FromStr for EventRange {
    type Err = ParseEventRangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            other => Err(ParseEventRangeError(other.to_string())),
        }
    }
}

/// Returns whether `at` falls on the same calendar day as `now`, in `now`'s zone.
pub fn is_same_day<Tz: TimeZone>(at: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    at.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Inclusion predicate of one tab.
pub fn matches_range<Tz: TimeZone>(event: &Event, range: EventRange, now: &DateTime<Tz>) -> bool {
    match range {
        EventRange::Today => !event.done && is_same_day(&event.at, now),
        EventRange::Upcoming => !event.done && event.at > now.with_timezone(&Utc),
        EventRange::Completed => event.done,
    }
}

/// Events shown by `range`, in input order.
pub fn categorize<'a, Tz: TimeZone>(
    events: &'a [Event],
    range: EventRange,
    now: &DateTime<Tz>,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| matches_range(event, range, now))
        .collect()
}

/// Primary bucket of one event.
///
/// Unlike the tab predicates this is a partition: `completed` wins, then
/// `today`, then `upcoming`. A past open event from an earlier day has no
/// bucket.
pub fn classify<Tz: TimeZone>(event: &Event, now: &DateTime<Tz>) -> Option<EventRange> {
    EventRange::ALL
        .into_iter()
        .find(|range| matches_range(event, *range, now))
}

/// Number of events each tab would show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
}

impl TabCounts {
    pub fn get(&self, range: EventRange) -> usize {
        match range {
            EventRange::Today => self.today,
            EventRange::Upcoming => self.upcoming,
            EventRange::Completed => self.completed,
        }
    }
}

pub fn tab_counts<Tz: TimeZone>(events: &[Event], now: &DateTime<Tz>) -> TabCounts {
    events.iter().fold(TabCounts::default(), |mut counts, event| {
        if matches_range(event, EventRange::Today, now) {
            counts.today += 1;
        }
        if matches_range(event, EventRange::Upcoming, now) {
            counts.upcoming += 1;
        }
        if matches_range(event, EventRange::Completed, now) {
            counts.completed += 1;
        }
        counts
    })
}

//! Timeline tabs and rows.

use crate::model::event::{Event, EventId, EventKind};
use crate::timeline::{categorize, format_event_time, is_same_day, tab_counts, EventRange};
use chrono::{DateTime, TimeZone};

/// One rendered timeline row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub id: EventId,
    pub title: String,
    pub kind: EventKind,
    pub kind_label: &'static str,
    /// `HH:MM` today, `<weekday> <day> <month> HH:MM` otherwise.
    pub time_display: String,
    /// Drives the clock (today) vs calendar (other day) icon.
    pub is_today: bool,
    pub done: bool,
}

impl TimelineItem {
    pub fn present<Tz: TimeZone>(event: &Event, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let is_today = is_same_day(&event.at, now);
        Self {
            id: event.id,
            title: event.title.clone(),
            kind: event.kind,
            kind_label: event.kind.label(),
            time_display: format_event_time(&event.at, is_today, &now.timezone()),
            is_today,
            done: event.done,
        }
    }
}

/// Tab header with its badge count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub range: EventRange,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

impl Tab {
    /// Badges are hidden for empty tabs.
    pub fn shows_badge(&self) -> bool {
        self.count > 0
    }
}

/// Placeholder shown when the active tab has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: Option<&'static str>,
}

/// Selected tab of the timeline; starts on `today`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineState {
    selected: EventRange,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> EventRange {
        self.selected
    }

    pub fn select(&mut self, range: EventRange) {
        self.selected = range;
    }

    pub fn tabs<Tz: TimeZone>(&self, events: &[Event], now: &DateTime<Tz>) -> [Tab; 3] {
        let counts = tab_counts(events, now);
        EventRange::ALL.map(|range| Tab {
            range,
            label: range.label(),
            count: counts.get(range),
            active: range == self.selected,
        })
    }

    /// Rows of the selected tab, in input order.
    pub fn items<Tz: TimeZone>(&self, events: &[Event], now: &DateTime<Tz>) -> Vec<TimelineItem>
    where
        Tz::Offset: std::fmt::Display,
    {
        categorize(events, self.selected, now)
            .into_iter()
            .map(|event| TimelineItem::present(event, now))
            .collect()
    }

    pub fn empty_state(&self) -> EmptyState {
        let title = match self.selected {
            EventRange::Today => "No events today",
            EventRange::Upcoming => "No upcoming events",
            EventRange::Completed => "No completed events",
        };
        let hint = match self.selected {
            EventRange::Completed => None,
            EventRange::Today | EventRange::Upcoming => {
                Some("Connect a backend to create events")
            }
        };
        EmptyState { title, hint }
    }
}

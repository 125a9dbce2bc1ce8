//! Dashboard KPI tiles derived from the event list.

use crate::model::event::{Event, EventKind};
use crate::timeline::{is_same_day, matches_range, EventRange};
use chrono::{DateTime, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiKind {
    /// Open appointments today or later.
    Appointments,
    /// Open care items today or later.
    Care,
    /// Open watch items, whatever their date.
    Watch,
    /// Events done and scheduled on the current day.
    CompletedToday,
}

impl KpiKind {
    pub const ALL: [KpiKind; 4] = [
        Self::Appointments,
        Self::Care,
        Self::Watch,
        Self::CompletedToday,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Appointments => "Appointments",
            Self::Care => "Care",
            Self::Watch => "Watch list",
            Self::CompletedToday => "Completed",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Appointments => "Upcoming",
            Self::Care => "Planned",
            Self::Watch => "Items",
            Self::CompletedToday => "Today",
        }
    }

    /// Timeline deep link opened by the tile.
    pub fn href(self) -> &'static str {
        match self {
            Self::Appointments => "/timeline?filter=appointments",
            Self::Care => "/timeline?filter=care",
            Self::Watch => "/timeline?filter=watch",
            Self::CompletedToday => "/timeline?filter=completed",
        }
    }

    fn counts<Tz: TimeZone>(self, event: &Event, now: &DateTime<Tz>) -> bool {
        let scheduled = matches_range(event, EventRange::Today, now)
            || matches_range(event, EventRange::Upcoming, now);
        match self {
            Self::Appointments => event.kind == EventKind::Appointment && scheduled,
            Self::Care => event.kind == EventKind::Care && scheduled,
            Self::Watch => event.kind == EventKind::Watch && !event.done,
            Self::CompletedToday => event.done && is_same_day(&event.at, now),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiTile {
    pub kind: KpiKind,
    pub count: usize,
}

impl KpiTile {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn subtitle(&self) -> &'static str {
        self.kind.subtitle()
    }
}

/// The four tiles in carousel order.
pub fn kpi_tiles<Tz: TimeZone>(events: &[Event], now: &DateTime<Tz>) -> [KpiTile; 4] {
    KpiKind::ALL.map(|kind| KpiTile {
        kind,
        count: events.iter().filter(|event| kind.counts(event, now)).count(),
    })
}

//! Compact pet card derivation.
//!
//! # Responsibility
//! - Build the card header line, status pill and mini metrics of one pet.
//!
//! # Invariants
//! - Status is `late` when an open event from an earlier day exists, else
//!   `watch` when open watch events or unresolved issues exist, else `ok`.

use crate::model::event::{Event, EventKind};
use crate::model::health::{Issue, Weight};
use crate::model::pet::{Pet, PetId};
use crate::timeline::{classify, matches_range, EventRange};
use chrono::{DateTime, TimeZone, Utc};

const SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStatus {
    Ok,
    Watch,
    Late,
}

impl PetStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "All good",
            Self::Watch => "Keep an eye",
            Self::Late => "Overdue",
        }
    }
}

/// Next open event of a pet with a relative day label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextEvent {
    pub title: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCard {
    pub id: PetId,
    pub name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub subtitle: String,
    pub status: PetStatus,
    pub next_event: Option<NextEvent>,
    pub weight_label: String,
    pub wellbeing_label: String,
    pub expanded: bool,
}

/// Inputs of one card besides the pet itself.
#[derive(Debug, Clone, Copy)]
pub struct PetCardContext<'a> {
    /// Events of every pet; filtered by pet id here.
    pub events: &'a [Event],
    /// Issues of every pet; filtered by pet id here.
    pub issues: &'a [Issue],
    pub latest_weight: Option<&'a Weight>,
    pub wellbeing_score: Option<u8>,
    pub expanded: bool,
}

impl PetCard {
    pub fn build<Tz: TimeZone>(pet: &Pet, context: PetCardContext<'_>, now: &DateTime<Tz>) -> Self {
        let own_events: Vec<&Event> = context
            .events
            .iter()
            .filter(|event| event.pet_id == pet.id)
            .collect();
        let open_issues = context
            .issues
            .iter()
            .filter(|issue| issue.pet_id == pet.id && !issue.resolved)
            .count();

        Self {
            id: pet.id,
            name: pet.name.clone(),
            initials: pet.initials(),
            avatar_url: pet.avatar_url.clone(),
            subtitle: pet_subtitle(pet, now),
            status: pet_status(&own_events, open_issues, now),
            next_event: next_event(&own_events, now).map(|event| NextEvent {
                title: event.title.clone(),
                when: relative_day_label(&event.at, now),
            }),
            weight_label: match context.latest_weight {
                Some(weight) => format!("{:.1} kg", weight.kg),
                None => "--kg".to_string(),
            },
            wellbeing_label: match context.wellbeing_score {
                Some(score) => format!("{score}/100"),
                None => "--/100".to_string(),
            },
            expanded: context.expanded,
        }
    }
}

/// `<breed> • <sex> • <age>`, skipping unknown parts.
pub fn pet_subtitle<Tz: TimeZone>(pet: &Pet, now: &DateTime<Tz>) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(breed) = pet.breed.as_deref().filter(|breed| !breed.trim().is_empty()) {
        parts.push(breed.to_string());
    }
    if let Some(sex) = pet.sex {
        parts.push(sex.label().to_string());
    }
    match pet.age_years(now.date_naive()) {
        Some(0) | None => {}
        Some(1) => parts.push("1 yr".to_string()),
        Some(years) => parts.push(format!("{years} yrs")),
    }
    parts.join(SEPARATOR)
}

pub fn pet_status<Tz: TimeZone>(
    events: &[&Event],
    open_issues: usize,
    now: &DateTime<Tz>,
) -> PetStatus {
    let overdue = events
        .iter()
        .any(|event| !event.done && classify(event, now).is_none());
    if overdue {
        return PetStatus::Late;
    }
    let watching = events
        .iter()
        .any(|event| !event.done && event.kind == EventKind::Watch);
    if watching || open_issues > 0 {
        return PetStatus::Watch;
    }
    PetStatus::Ok
}

/// Earliest open event strictly after `now`.
pub fn next_event<'a, Tz: TimeZone>(events: &[&'a Event], now: &DateTime<Tz>) -> Option<&'a Event> {
    events
        .iter()
        .copied()
        .filter(|event| matches_range(event, EventRange::Upcoming, now))
        .min_by_key(|event| event.at)
}

/// `Today`, `Tomorrow` or `In <n> days`, by local calendar day.
pub fn relative_day_label<Tz: TimeZone>(at: &DateTime<Utc>, now: &DateTime<Tz>) -> String {
    let event_day = at.with_timezone(&now.timezone()).date_naive();
    let days = (event_day - now.date_naive()).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("In {n} days"),
    }
}

//! Scheduled pet-care event model.
//!
//! # Responsibility
//! - Define the event record rendered by the timeline and KPI tiles.
//! - Define insert/patch payloads accepted by event repositories.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - Only `done` changes after an event is first rendered.
//! - `title` is never empty once validated.

use crate::model::pet::PetId;
use crate::model::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of one event.
pub type EventId = Uuid;

/// Category of a scheduled activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Vet or groomer appointment.
    Appointment,
    /// Recurring care (medication, deworming, grooming at home).
    Care,
    /// Something to keep an eye on.
    Watch,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [Self::Appointment, Self::Care, Self::Watch];

    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Care => "care",
            Self::Watch => "watch",
        }
    }

    /// Short chip label shown next to a timeline row.
    pub fn label(self) -> &'static str {
        match self {
            Self::Appointment => "Appt",
            Self::Care => "Care",
            Self::Watch => "Watch",
        }
    }
}

/// Scheduled pet-care activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub pet_id: PetId,
    /// Serialized as `type` to match the events table.
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    /// Scheduled instant.
    pub at: DateTime<Utc>,
    /// Completion flag, the only field toggled by user action.
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Builds a persisted event from an insert payload.
    ///
    /// Used by backends once they have assigned identity.
    pub fn from_new(id: EventId, new_event: NewEvent, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            pet_id: new_event.pet_id,
            kind: new_event.kind,
            title: new_event.title,
            at: new_event.at,
            done: new_event.done,
            created_at,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Applies every `Some` field of `patch`.
    pub fn apply_patch(&mut self, patch: &EventPatch) {
        if let Some(pet_id) = patch.pet_id {
            self.pet_id = pet_id;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(at) = patch.at {
            self.at = at;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

/// Insert shape for a new event; identity and `created_at` come from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub pet_id: PetId,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub title: String,
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub done: bool,
}

impl NewEvent {
    /// Creates a not-yet-done event payload.
    pub fn new(
        pet_id: PetId,
        kind: EventKind,
        title: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            pet_id,
            kind,
            title: title.into(),
            at,
            done: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub pet_id: Option<PetId>,
    #[serde(rename = "type")]
    pub kind: Option<EventKind>,
    pub title: Option<String>,
    pub at: Option<DateTime<Utc>>,
    pub done: Option<bool>,
}

impl EventPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyEventTitle);
    }
    Ok(())
}

//! Event use-case service.
//!
//! # Responsibility
//! - Provide list/create/toggle/update/delete entry points for events.
//! - Delegate persistence to the configured repository.
//!
//! # Invariants
//! - Payloads are validated before reaching the repository.
//! - The service holds no event state; callers re-list and re-categorize
//!   after any mutation.

use crate::model::event::{Event, EventId, EventPatch, NewEvent};
use crate::model::pet::PetId;
use crate::repo::error::{DataError, DataResult};
use crate::repo::event_repo::EventRepository;
use crate::service::{log_mutation, log_read};
use crate::timeline::EventRange;
use log::debug;
use std::time::Instant;

/// Use-case service wrapper for event operations.
pub struct EventService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists events for one timeline range.
    pub fn list_events(&self, range: EventRange) -> DataResult<Vec<Event>> {
        let result = log_read("event_list", self.repo.list_events(range));
        if let Ok(events) = &result {
            debug!(
                "event=event_list module=service status=ok range={range} count={}",
                events.len()
            );
        }
        result
    }

    pub fn list_events_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Event>> {
        log_read("event_list_by_pet", self.repo.list_events_by_pet(pet_id))
    }

    /// Creates an event after validating the payload.
    pub fn create_event(&self, new_event: &NewEvent) -> DataResult<Event> {
        let started_at = Instant::now();
        let result = new_event
            .validate()
            .map_err(DataError::from)
            .and_then(|()| self.repo.create_event(new_event));
        log_mutation("event_create", started_at, result)
    }

    /// Flips the completion flag of one event.
    ///
    /// # Contract
    /// - Returns the updated event from the backend.
    /// - Without a backend, fails with `DataError::NotConnected`.
    pub fn toggle_event_done(&self, id: EventId) -> DataResult<Event> {
        let started_at = Instant::now();
        log_mutation("event_toggle", started_at, self.repo.toggle_event_done(id))
    }

    pub fn update_event(&self, id: EventId, patch: &EventPatch) -> DataResult<Event> {
        let started_at = Instant::now();
        let result = patch
            .validate()
            .map_err(DataError::from)
            .and_then(|()| self.repo.update_event(id, patch));
        log_mutation("event_update", started_at, result)
    }

    pub fn delete_event(&self, id: EventId) -> DataResult<()> {
        let started_at = Instant::now();
        log_mutation("event_delete", started_at, self.repo.delete_event(id))
    }
}

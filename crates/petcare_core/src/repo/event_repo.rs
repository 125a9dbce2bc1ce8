//! Event data-access contract.

use crate::model::event::{Event, EventId, EventPatch, NewEvent};
use crate::model::pet::PetId;
use crate::repo::error::DataResult;
use crate::timeline::EventRange;

/// Repository interface for scheduled events.
pub trait EventRepository {
    /// Events belonging to one timeline range, in backend order.
    fn list_events(&self, range: EventRange) -> DataResult<Vec<Event>>;
    fn list_events_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Event>>;
    fn create_event(&self, new_event: &NewEvent) -> DataResult<Event>;
    /// Flips `done` and returns the updated event.
    fn toggle_event_done(&self, id: EventId) -> DataResult<Event>;
    fn update_event(&self, id: EventId, patch: &EventPatch) -> DataResult<Event>;
    fn delete_event(&self, id: EventId) -> DataResult<()>;
}

impl<T: EventRepository + ?Sized> EventRepository for &T {
    fn list_events(&self, range: EventRange) -> DataResult<Vec<Event>> {
        (**self).list_events(range)
    }

    fn list_events_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Event>> {
        (**self).list_events_by_pet(pet_id)
    }

    fn create_event(&self, new_event: &NewEvent) -> DataResult<Event> {
        (**self).create_event(new_event)
    }

    fn toggle_event_done(&self, id: EventId) -> DataResult<Event> {
        (**self).toggle_event_done(id)
    }

    fn update_event(&self, id: EventId, patch: &EventPatch) -> DataResult<Event> {
        (**self).update_event(id, patch)
    }

    fn delete_event(&self, id: EventId) -> DataResult<()> {
        (**self).delete_event(id)
    }
}

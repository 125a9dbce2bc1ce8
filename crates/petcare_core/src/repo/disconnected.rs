//! Backend stub used while no data service is configured.
//!
//! # Invariants
//! - Every read returns an empty result (`[]`, `None`).
//! - Every mutation returns `DataError::NotConnected` with an
//!   operation-specific message and performs no side effect.

use crate::model::event::{Event, EventId, EventPatch, NewEvent};
use crate::model::health::{Issue, Severity, Weight, WellbeingLog};
use crate::model::memory::{Memory, NewMemory};
use crate::model::pet::{NewPet, Pet, PetId, PetPatch};
use crate::repo::error::{DataError, DataResult};
use crate::repo::event_repo::EventRepository;
use crate::repo::health_repo::HealthRepository;
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::pet_repo::PetRepository;
use crate::repo::DataBackend;
use crate::timeline::EventRange;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Zero-sized stub backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisconnectedBackend;

impl DisconnectedBackend {
    pub fn new() -> Self {
        Self
    }
}

impl EventRepository for DisconnectedBackend {
    fn list_events(&self, _range: EventRange) -> DataResult<Vec<Event>> {
        Ok(Vec::new())
    }

    fn list_events_by_pet(&self, _pet_id: PetId) -> DataResult<Vec<Event>> {
        Ok(Vec::new())
    }

    fn create_event(&self, _new_event: &NewEvent) -> DataResult<Event> {
        Err(DataError::not_connected("create event"))
    }

    fn toggle_event_done(&self, _id: EventId) -> DataResult<Event> {
        Err(DataError::not_connected("update event"))
    }

    fn update_event(&self, _id: EventId, _patch: &EventPatch) -> DataResult<Event> {
        Err(DataError::not_connected("update event"))
    }

    fn delete_event(&self, _id: EventId) -> DataResult<()> {
        Err(DataError::not_connected("delete event"))
    }
}

impl PetRepository for DisconnectedBackend {
    fn list_pets(&self) -> DataResult<Vec<Pet>> {
        Ok(Vec::new())
    }

    fn get_pet(&self, _id: PetId) -> DataResult<Option<Pet>> {
        Ok(None)
    }

    fn create_pet(&self, _new_pet: &NewPet) -> DataResult<Pet> {
        Err(DataError::not_connected("create pet"))
    }

    fn update_pet(&self, _id: PetId, _patch: &PetPatch) -> DataResult<Pet> {
        Err(DataError::not_connected("update pet"))
    }

    fn delete_pet(&self, _id: PetId) -> DataResult<()> {
        Err(DataError::not_connected("delete pet"))
    }
}

impl HealthRepository for DisconnectedBackend {
    fn list_issues(&self, _pet_id: PetId) -> DataResult<Vec<Issue>> {
        Ok(Vec::new())
    }

    fn list_open_issues(&self) -> DataResult<Vec<Issue>> {
        Ok(Vec::new())
    }

    fn report_issue(
        &self,
        _pet_id: PetId,
        _severity: Severity,
        _symptom: &str,
    ) -> DataResult<Issue> {
        Err(DataError::not_connected("report issue"))
    }

    fn resolve_issue(&self, _id: Uuid) -> DataResult<Issue> {
        Err(DataError::not_connected("resolve issue"))
    }

    fn list_weights(&self, _pet_id: PetId) -> DataResult<Vec<Weight>> {
        Ok(Vec::new())
    }

    fn latest_weight(&self, _pet_id: PetId) -> DataResult<Option<Weight>> {
        Ok(None)
    }

    fn add_weight(
        &self,
        _pet_id: PetId,
        _kg: f64,
        _measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight> {
        Err(DataError::not_connected("add weight"))
    }

    fn delete_weight(&self, _id: Uuid) -> DataResult<()> {
        Err(DataError::not_connected("delete weight"))
    }

    fn list_wellbeing_logs(&self, _pet_id: PetId) -> DataResult<Vec<WellbeingLog>> {
        Ok(Vec::new())
    }

    fn list_all_wellbeing_logs(&self) -> DataResult<Vec<WellbeingLog>> {
        Ok(Vec::new())
    }

    fn log_wellbeing(
        &self,
        _pet_id: PetId,
        _score: u8,
        _note: Option<&str>,
    ) -> DataResult<WellbeingLog> {
        Err(DataError::not_connected("log wellbeing"))
    }
}

impl MemoryRepository for DisconnectedBackend {
    fn list_memories(&self) -> DataResult<Vec<Memory>> {
        Ok(Vec::new())
    }

    fn list_memories_by_pet(&self, _pet_id: PetId) -> DataResult<Vec<Memory>> {
        Ok(Vec::new())
    }

    fn upload_memory(&self, _new_memory: &NewMemory) -> DataResult<Memory> {
        Err(DataError::NotConnected(
            "cannot upload memory - backend connection and storage required".to_string(),
        ))
    }

    fn delete_memory(&self, _id: Uuid) -> DataResult<()> {
        Err(DataError::not_connected("delete memory"))
    }
}

impl DataBackend for DisconnectedBackend {
    fn backend_name(&self) -> &'static str {
        "none"
    }

    fn is_connected(&self) -> bool {
        false
    }
}

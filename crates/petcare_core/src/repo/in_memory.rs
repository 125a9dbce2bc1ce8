//! In-process backend holding every record family in memory.
//!
//! # Responsibility
//! - Back the data-access contracts without an external service, for the
//!   CLI demo mode and for tests of the toggle/re-categorize flow.
//!
//! # Invariants
//! - Records keep insertion order; list calls return that order.
//! - Write paths validate payloads before mutating the store.
//! - Unknown ids fail with `DataError::Generic`, never `NotConnected`.
//! - Single-threaded: interior mutability uses `RefCell`.

use crate::model::event::{Event, EventId, EventPatch, NewEvent};
use crate::model::health::{
    validate_kg, validate_score, validate_symptom, Issue, Severity, Weight, WellbeingLog,
};
use crate::model::memory::{Memory, NewMemory};
use crate::model::pet::{NewPet, Pet, PetId, PetPatch};
use crate::repo::error::{DataError, DataResult};
use crate::repo::event_repo::EventRepository;
use crate::repo::health_repo::HealthRepository;
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::pet_repo::PetRepository;
use crate::repo::DataBackend;
use crate::timeline::{matches_range, EventRange};
use chrono::{DateTime, Local, Utc};
use std::cell::RefCell;
use uuid::Uuid;

/// Source of "now" for range filtering and `created_at` stamps.
pub type Clock = fn() -> DateTime<Local>;

#[derive(Debug, Default)]
struct Store {
    events: Vec<Event>,
    pets: Vec<Pet>,
    issues: Vec<Issue>,
    weights: Vec<Weight>,
    wellbeing_logs: Vec<WellbeingLog>,
    memories: Vec<Memory>,
}

/// In-memory implementation of every repository contract.
#[derive(Debug)]
pub struct InMemoryBackend {
    store: RefCell<Store>,
    clock: Clock,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Local::now)
    }

    /// Empty store using a caller-provided clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            store: RefCell::new(Store::default()),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Local> {
        (self.clock)()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

impl EventRepository for InMemoryBackend {
    fn list_events(&self, range: EventRange) -> DataResult<Vec<Event>> {
        let now = self.now();
        let store = self.store.borrow();
        Ok(store
            .events
            .iter()
            .filter(|event| matches_range(event, range, &now))
            .cloned()
            .collect())
    }

    fn list_events_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Event>> {
        let store = self.store.borrow();
        Ok(store
            .events
            .iter()
            .filter(|event| event.pet_id == pet_id)
            .cloned()
            .collect())
    }

    fn create_event(&self, new_event: &NewEvent) -> DataResult<Event> {
        new_event.validate()?;
        let event = Event::from_new(Uuid::new_v4(), new_event.clone(), self.now_utc());
        self.store.borrow_mut().events.push(event.clone());
        Ok(event)
    }

    fn toggle_event_done(&self, id: EventId) -> DataResult<Event> {
        let mut store = self.store.borrow_mut();
        let event = store
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| DataError::not_found("event", id))?;
        event.toggle_done();
        Ok(event.clone())
    }

    fn update_event(&self, id: EventId, patch: &EventPatch) -> DataResult<Event> {
        patch.validate()?;
        let mut store = self.store.borrow_mut();
        let event = store
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| DataError::not_found("event", id))?;
        event.apply_patch(patch);
        Ok(event.clone())
    }

    fn delete_event(&self, id: EventId) -> DataResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.events.len();
        store.events.retain(|event| event.id != id);
        if store.events.len() == before {
            return Err(DataError::not_found("event", id));
        }
        Ok(())
    }
}

impl PetRepository for InMemoryBackend {
    fn list_pets(&self) -> DataResult<Vec<Pet>> {
        Ok(self.store.borrow().pets.clone())
    }

    fn get_pet(&self, id: PetId) -> DataResult<Option<Pet>> {
        let store = self.store.borrow();
        Ok(store.pets.iter().find(|pet| pet.id == id).cloned())
    }

    fn create_pet(&self, new_pet: &NewPet) -> DataResult<Pet> {
        new_pet.validate()?;
        let pet = Pet::from_new(Uuid::new_v4(), new_pet.clone(), self.now_utc());
        self.store.borrow_mut().pets.push(pet.clone());
        Ok(pet)
    }

    fn update_pet(&self, id: PetId, patch: &PetPatch) -> DataResult<Pet> {
        patch.validate()?;
        let mut store = self.store.borrow_mut();
        let pet = store
            .pets
            .iter_mut()
            .find(|pet| pet.id == id)
            .ok_or_else(|| DataError::not_found("pet", id))?;
        pet.apply_patch(patch);
        Ok(pet.clone())
    }

    /// Removes the pet together with every record it owns.
    fn delete_pet(&self, id: PetId) -> DataResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.pets.len();
        store.pets.retain(|pet| pet.id != id);
        if store.pets.len() == before {
            return Err(DataError::not_found("pet", id));
        }
        store.events.retain(|event| event.pet_id != id);
        store.issues.retain(|issue| issue.pet_id != id);
        store.weights.retain(|weight| weight.pet_id != id);
        store.wellbeing_logs.retain(|log| log.pet_id != id);
        store.memories.retain(|memory| memory.pet_id != id);
        Ok(())
    }
}

impl HealthRepository for InMemoryBackend {
    fn list_issues(&self, pet_id: PetId) -> DataResult<Vec<Issue>> {
        let store = self.store.borrow();
        Ok(store
            .issues
            .iter()
            .filter(|issue| issue.pet_id == pet_id)
            .cloned()
            .collect())
    }

    fn list_open_issues(&self) -> DataResult<Vec<Issue>> {
        let store = self.store.borrow();
        Ok(store
            .issues
            .iter()
            .filter(|issue| !issue.resolved)
            .cloned()
            .collect())
    }

    fn report_issue(&self, pet_id: PetId, severity: Severity, symptom: &str) -> DataResult<Issue> {
        validate_symptom(symptom)?;
        let issue = Issue {
            id: Uuid::new_v4(),
            pet_id,
            severity,
            symptom: symptom.trim().to_string(),
            resolved: false,
            created_at: self.now_utc(),
        };
        self.store.borrow_mut().issues.push(issue.clone());
        Ok(issue)
    }

    fn resolve_issue(&self, id: Uuid) -> DataResult<Issue> {
        let mut store = self.store.borrow_mut();
        let issue = store
            .issues
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| DataError::not_found("issue", id))?;
        issue.resolved = true;
        Ok(issue.clone())
    }

    fn list_weights(&self, pet_id: PetId) -> DataResult<Vec<Weight>> {
        let store = self.store.borrow();
        let mut weights: Vec<Weight> = store
            .weights
            .iter()
            .filter(|weight| weight.pet_id == pet_id)
            .cloned()
            .collect();
        weights.sort_by_key(|weight| weight.measured_at);
        Ok(weights)
    }

    fn latest_weight(&self, pet_id: PetId) -> DataResult<Option<Weight>> {
        Ok(self.list_weights(pet_id)?.pop())
    }

    fn add_weight(
        &self,
        pet_id: PetId,
        kg: f64,
        measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight> {
        validate_kg(kg)?;
        let now = self.now_utc();
        let weight = Weight {
            id: Uuid::new_v4(),
            pet_id,
            kg,
            measured_at: measured_at.unwrap_or(now),
            created_at: now,
        };
        self.store.borrow_mut().weights.push(weight.clone());
        Ok(weight)
    }

    fn delete_weight(&self, id: Uuid) -> DataResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.weights.len();
        store.weights.retain(|weight| weight.id != id);
        if store.weights.len() == before {
            return Err(DataError::not_found("weight", id));
        }
        Ok(())
    }

    fn list_wellbeing_logs(&self, pet_id: PetId) -> DataResult<Vec<WellbeingLog>> {
        Ok(self
            .list_all_wellbeing_logs()?
            .into_iter()
            .filter(|log| log.pet_id == pet_id)
            .collect())
    }

    fn list_all_wellbeing_logs(&self) -> DataResult<Vec<WellbeingLog>> {
        let mut logs = self.store.borrow().wellbeing_logs.clone();
        logs.sort_by_key(|log| log.logged_at);
        Ok(logs)
    }

    fn log_wellbeing(
        &self,
        pet_id: PetId,
        score: u8,
        note: Option<&str>,
    ) -> DataResult<WellbeingLog> {
        validate_score(score)?;
        let now = self.now_utc();
        let log = WellbeingLog {
            id: Uuid::new_v4(),
            pet_id,
            score,
            note: note
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            logged_at: now,
            created_at: now,
        };
        self.store.borrow_mut().wellbeing_logs.push(log.clone());
        Ok(log)
    }
}

impl MemoryRepository for InMemoryBackend {
    fn list_memories(&self) -> DataResult<Vec<Memory>> {
        Ok(self.store.borrow().memories.clone())
    }

    fn list_memories_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Memory>> {
        let store = self.store.borrow();
        Ok(store
            .memories
            .iter()
            .filter(|memory| memory.pet_id == pet_id)
            .cloned()
            .collect())
    }

    fn upload_memory(&self, new_memory: &NewMemory) -> DataResult<Memory> {
        new_memory.validate()?;
        let memory = Memory {
            id: Uuid::new_v4(),
            pet_id: new_memory.pet_id,
            image_url: new_memory.image_url.clone(),
            caption: new_memory.caption.clone(),
            taken_at: new_memory.taken_at,
            created_at: self.now_utc(),
        };
        self.store.borrow_mut().memories.push(memory.clone());
        Ok(memory)
    }

    fn delete_memory(&self, id: Uuid) -> DataResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.memories.len();
        store.memories.retain(|memory| memory.id != id);
        if store.memories.len() == before {
            return Err(DataError::not_found("memory", id));
        }
        Ok(())
    }
}

impl DataBackend for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn is_connected(&self) -> bool {
        true
    }
}

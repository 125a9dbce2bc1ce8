use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use petcare_core::view::notice::NoticeKind;
use petcare_core::{
    DashboardData, DashboardState, DataBackend, DataError, DataResult, Event, EventId,
    EventKind, EventPatch, EventRange, EventRepository, HealthRepository, InMemoryBackend,
    Issue, Memory, MemoryRepository, NewEvent, NewMemory, NewPet, Pet, PetId, PetPatch,
    PetRepository, Severity, Species, Weight, WellbeingLog,
};
use std::time::Instant;
use uuid::Uuid;

fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 10, 17, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}

/// Connected backend whose range and memory listings fail.
struct FailingReads {
    inner: InMemoryBackend,
}

fn read_failure() -> DataError {
    DataError::Generic("backend read failed".to_string())
}

impl EventRepository for FailingReads {
    fn list_events(&self, _range: EventRange) -> DataResult<Vec<Event>> {
        Err(read_failure())
    }

    fn list_events_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Event>> {
        self.inner.list_events_by_pet(pet_id)
    }

    fn create_event(&self, new_event: &NewEvent) -> DataResult<Event> {
        self.inner.create_event(new_event)
    }

    fn toggle_event_done(&self, id: EventId) -> DataResult<Event> {
        self.inner.toggle_event_done(id)
    }

    fn update_event(&self, id: EventId, patch: &EventPatch) -> DataResult<Event> {
        self.inner.update_event(id, patch)
    }

    fn delete_event(&self, id: EventId) -> DataResult<()> {
        self.inner.delete_event(id)
    }
}

impl PetRepository for FailingReads {
    fn list_pets(&self) -> DataResult<Vec<Pet>> {
        self.inner.list_pets()
    }

    fn get_pet(&self, id: PetId) -> DataResult<Option<Pet>> {
        self.inner.get_pet(id)
    }

    fn create_pet(&self, new_pet: &NewPet) -> DataResult<Pet> {
        self.inner.create_pet(new_pet)
    }

    fn update_pet(&self, id: PetId, patch: &PetPatch) -> DataResult<Pet> {
        self.inner.update_pet(id, patch)
    }

    fn delete_pet(&self, id: PetId) -> DataResult<()> {
        self.inner.delete_pet(id)
    }
}

impl HealthRepository for FailingReads {
    fn list_issues(&self, pet_id: PetId) -> DataResult<Vec<Issue>> {
        self.inner.list_issues(pet_id)
    }

    fn list_open_issues(&self) -> DataResult<Vec<Issue>> {
        self.inner.list_open_issues()
    }

    fn report_issue(&self, pet_id: PetId, severity: Severity, symptom: &str) -> DataResult<Issue> {
        self.inner.report_issue(pet_id, severity, symptom)
    }

    fn resolve_issue(&self, id: Uuid) -> DataResult<Issue> {
        self.inner.resolve_issue(id)
    }

    fn list_weights(&self, pet_id: PetId) -> DataResult<Vec<Weight>> {
        self.inner.list_weights(pet_id)
    }

    fn latest_weight(&self, pet_id: PetId) -> DataResult<Option<Weight>> {
        self.inner.latest_weight(pet_id)
    }

    fn add_weight(
        &self,
        pet_id: PetId,
        kg: f64,
        measured_at: Option<DateTime<Utc>>,
    ) -> DataResult<Weight> {
        self.inner.add_weight(pet_id, kg, measured_at)
    }

    fn delete_weight(&self, id: Uuid) -> DataResult<()> {
        self.inner.delete_weight(id)
    }

    fn list_wellbeing_logs(&self, pet_id: PetId) -> DataResult<Vec<WellbeingLog>> {
        self.inner.list_wellbeing_logs(pet_id)
    }

    fn list_all_wellbeing_logs(&self) -> DataResult<Vec<WellbeingLog>> {
        self.inner.list_all_wellbeing_logs()
    }

    fn log_wellbeing(
        &self,
        pet_id: PetId,
        score: u8,
        note: Option<&str>,
    ) -> DataResult<WellbeingLog> {
        self.inner.log_wellbeing(pet_id, score, note)
    }
}

impl MemoryRepository for FailingReads {
    fn list_memories(&self) -> DataResult<Vec<Memory>> {
        Err(read_failure())
    }

    fn list_memories_by_pet(&self, pet_id: PetId) -> DataResult<Vec<Memory>> {
        self.inner.list_memories_by_pet(pet_id)
    }

    fn upload_memory(&self, new_memory: &NewMemory) -> DataResult<Memory> {
        self.inner.upload_memory(new_memory)
    }

    fn delete_memory(&self, id: Uuid) -> DataResult<()> {
        self.inner.delete_memory(id)
    }
}

impl DataBackend for FailingReads {
    fn backend_name(&self) -> &'static str {
        "failing_reads"
    }

    fn is_connected(&self) -> bool {
        true
    }
}

fn seeded() -> FailingReads {
    let inner = InMemoryBackend::with_clock(fixed_now);
    let pet = inner
        .create_pet(&NewPet::new("Biscuit", Species::Dog))
        .unwrap();
    inner
        .create_event(&NewEvent::new(
            pet.id,
            EventKind::Care,
            "Evening meds",
            fixed_now().with_timezone(&Utc) + Duration::hours(3),
        ))
        .unwrap();
    inner.add_weight(pet.id, 12.0, None).unwrap();
    inner.log_wellbeing(pet.id, 70, None).unwrap();
    FailingReads { inner }
}

#[test]
fn failed_reads_leave_other_sections_loaded() {
    let backend = seeded();
    let (data, errors) = DashboardData::load(&backend);

    // Three range listings plus the memories listing.
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(DataError::is_retryable));

    assert_eq!(data.pets.len(), 1);
    assert!(data.memories.is_empty());
    assert_eq!(data.latest_weights.len(), 1);
    assert_eq!(data.wellbeing.current_score, Some(70));
    // The per-pet pass still brings the pet's events in.
    assert_eq!(data.events.len(), 1);
}

#[test]
fn load_errors_surface_as_a_retryable_notice() {
    let backend = seeded();
    let (data, errors) = DashboardData::load(&backend);

    let mut state = DashboardState::new(400.0);
    let raised_at = Instant::now();
    state.report_load_errors(&errors, raised_at);

    let notice = state.notice().expect("notice after failed reads");
    assert_eq!(notice.kind, NoticeKind::Retryable);
    assert!(notice.can_retry());
    assert_eq!(notice.message, "backend read failed");

    state.expire_notice(raised_at + std::time::Duration::from_secs(60));
    let view = state.render(&data, &fixed_now());
    assert!(view.notice.is_some_and(|notice| notice.can_retry()));
    assert_eq!(view.pet_cards.len(), 1);
}

#[test]
fn no_errors_leave_the_notice_untouched() {
    let mut state = DashboardState::new(400.0);
    state.report_load_errors(&[], Instant::now());
    assert!(state.notice().is_none());
}

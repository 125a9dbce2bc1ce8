use chrono::Utc;
use petcare_core::{
    DataBackend, DataError, DisconnectedBackend, EventKind, EventPatch, EventRange,
    EventRepository, EventService, HealthRepository, MemoryRepository, MemoryService, NewEvent,
    NewMemory, NewPet, PetPatch, PetRepository, PetService, Severity, Species, WellbeingService,
};
use uuid::Uuid;

fn assert_not_connected<T: std::fmt::Debug>(result: Result<T, DataError>, operation: &str) {
    match result {
        Err(DataError::NotConnected(message)) => {
            assert!(
                message.contains(operation),
                "message `{message}` should name `{operation}`"
            );
        }
        other => panic!("expected NotConnected for {operation}, got {other:?}"),
    }
}

#[test]
fn reads_succeed_with_empty_results() {
    let backend = DisconnectedBackend::new();
    let pet_id = Uuid::new_v4();

    for range in EventRange::ALL {
        assert!(backend.list_events(range).unwrap().is_empty());
    }
    assert!(backend.list_events_by_pet(pet_id).unwrap().is_empty());
    assert!(backend.list_pets().unwrap().is_empty());
    assert!(backend.get_pet(pet_id).unwrap().is_none());
    assert!(backend.list_issues(pet_id).unwrap().is_empty());
    assert!(backend.list_open_issues().unwrap().is_empty());
    assert!(backend.list_weights(pet_id).unwrap().is_empty());
    assert!(backend.latest_weight(pet_id).unwrap().is_none());
    assert!(backend.list_wellbeing_logs(pet_id).unwrap().is_empty());
    assert!(backend.list_all_wellbeing_logs().unwrap().is_empty());
    assert!(backend.list_memories().unwrap().is_empty());
    assert!(backend.list_memories_by_pet(pet_id).unwrap().is_empty());
}

#[test]
fn every_mutation_reports_not_connected() {
    let backend = DisconnectedBackend::new();
    let pet_id = Uuid::new_v4();
    let id = Uuid::new_v4();
    let new_event = NewEvent::new(pet_id, EventKind::Care, "Deworming", Utc::now());
    let new_memory = NewMemory {
        pet_id,
        image_url: "https://images.example/biscuit.jpg".to_string(),
        caption: None,
        taken_at: Utc::now(),
    };

    assert_not_connected(backend.create_event(&new_event), "create event");
    assert_not_connected(backend.toggle_event_done(id), "update event");
    assert_not_connected(backend.update_event(id, &EventPatch::default()), "update event");
    assert_not_connected(backend.delete_event(id), "delete event");
    assert_not_connected(
        backend.create_pet(&NewPet::new("Biscuit", Species::Dog)),
        "create pet",
    );
    assert_not_connected(backend.update_pet(id, &PetPatch::default()), "update pet");
    assert_not_connected(backend.delete_pet(id), "delete pet");
    assert_not_connected(
        backend.report_issue(pet_id, Severity::Low, "itching"),
        "report issue",
    );
    assert_not_connected(backend.resolve_issue(id), "resolve issue");
    assert_not_connected(backend.add_weight(pet_id, 12.5, None), "add weight");
    assert_not_connected(backend.delete_weight(id), "delete weight");
    assert_not_connected(backend.log_wellbeing(pet_id, 80, None), "log wellbeing");
    assert_not_connected(backend.upload_memory(&new_memory), "upload memory");
    assert_not_connected(backend.delete_memory(id), "delete memory");
}

#[test]
fn failed_mutations_leave_reads_unchanged() {
    let backend = DisconnectedBackend::new();
    let events = EventService::new(&backend);
    let pet_id = Uuid::new_v4();

    let _ = events.create_event(&NewEvent::new(pet_id, EventKind::Watch, "Limping", Utc::now()));
    let _ = events.toggle_event_done(Uuid::new_v4());

    for range in EventRange::ALL {
        assert!(events.list_events(range).unwrap().is_empty());
    }
}

#[test]
fn services_propagate_not_connected() {
    let backend = DisconnectedBackend::new();
    let pet_id = Uuid::new_v4();

    let err = PetService::new(&backend)
        .create_pet(&NewPet::new("Biscuit", Species::Dog))
        .unwrap_err();
    assert!(err.is_not_connected());
    assert!(!err.is_retryable());
    assert_eq!(err.kind(), "not_connected");

    let err = WellbeingService::new(&backend)
        .log_wellbeing(pet_id, 70, Some("calm"))
        .unwrap_err();
    assert!(err.is_not_connected());

    let err = MemoryService::new(&backend)
        .delete_memory(Uuid::new_v4())
        .unwrap_err();
    assert!(err.is_not_connected());
}

#[test]
fn invalid_payloads_fail_validation_before_reaching_the_backend() {
    let backend = DisconnectedBackend::new();
    let err = EventService::new(&backend)
        .create_event(&NewEvent::new(
            Uuid::new_v4(),
            EventKind::Care,
            "   ",
            Utc::now(),
        ))
        .unwrap_err();
    assert!(matches!(err, DataError::Generic(_)));
}

#[test]
fn invalid_health_payloads_fail_validation_before_reaching_the_backend() {
    let backend = DisconnectedBackend::new();
    let pet_id = Uuid::new_v4();
    let wellbeing = WellbeingService::new(&backend);

    let err = wellbeing.log_wellbeing(pet_id, 150, None).unwrap_err();
    assert!(matches!(err, DataError::Generic(_)), "{err:?}");

    let err = wellbeing
        .report_issue(pet_id, Severity::Low, "  ")
        .unwrap_err();
    assert!(matches!(err, DataError::Generic(_)), "{err:?}");

    let err = PetService::new(&backend)
        .add_weight(pet_id, -3.0, None)
        .unwrap_err();
    assert!(matches!(err, DataError::Generic(_)), "{err:?}");

    // Valid payloads still reach the backend.
    assert!(wellbeing
        .log_wellbeing(pet_id, 100, None)
        .unwrap_err()
        .is_not_connected());
}

#[test]
fn backend_reports_itself_as_disconnected() {
    let backend = DisconnectedBackend::new();
    assert_eq!(backend.backend_name(), "none");
    assert!(!backend.is_connected());

    let boxed: Box<dyn DataBackend> = Box::new(backend);
    assert!(boxed.list_pets().unwrap().is_empty());
}

#[test]
fn wellbeing_stats_are_empty_without_data() {
    let backend = DisconnectedBackend::new();
    let stats = WellbeingService::new(&backend).overall_stats().unwrap();
    assert_eq!(stats.current_score, None);
    assert_eq!(stats.trend_percentage, None);
    assert_eq!(stats.open_issues_count, 0);
}

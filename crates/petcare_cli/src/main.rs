//! CLI probe for `petcare_core`.
//!
//! # Responsibility
//! - Render the dashboard timeline for the configured backend as plain text.
//! - Exercise the toggle flow end to end, including the disconnected notice.
//!
//! Usage: `petcare_cli [today|upcoming|completed]` with the `PETCARE_*`
//! environment variables described in `petcare_core::config`.

use chrono::{Duration, Local, Utc};
use petcare_core::{
    init_logging, AppConfig, DashboardData, DashboardState, DataBackend, EventKind, EventRange,
    EventService, NewEvent, NewPet, PetService, Sex, Species, WellbeingService,
};
use std::process::ExitCode;
use std::time::Instant;
use uuid::Uuid;

const CLI_VIEWPORT_WIDTH: f64 = 390.0;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("petcare: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let range = match std::env::args().nth(1) {
        Some(value) => value.parse::<EventRange>().map_err(|err| err.to_string())?,
        None => EventRange::default(),
    };

    println!("petcare_core version={}", petcare_core::core_version());
    println!("backend={}", config.backend.as_str());

    let backend = config.backend.open();
    if backend.is_connected() {
        seed_demo_data(backend.as_ref()).map_err(|err| err.to_string())?;
    }

    let mut state = DashboardState::new(CLI_VIEWPORT_WIDTH);
    state.select_range(range);

    let events = EventService::new(backend.as_ref());
    let (data, errors) = DashboardData::load(backend.as_ref());
    state.report_load_errors(&errors, Instant::now());

    // Toggle the first open event, or a placeholder id when there is none.
    let target = data
        .events
        .iter()
        .find(|event| !event.done)
        .map_or_else(Uuid::new_v4, |event| event.id);
    let data = match state.toggle_event(&events, target, Instant::now()) {
        Some(_) => DashboardData::load(backend.as_ref()).0,
        None => data,
    };

    print_dashboard(&state, &data);
    Ok(())
}

fn seed_demo_data(backend: &dyn DataBackend) -> petcare_core::DataResult<()> {
    let pets = PetService::new(backend);
    let events = EventService::new(backend);
    let wellbeing = WellbeingService::new(backend);

    let mut new_pet = NewPet::new("Biscuit", Species::Dog);
    new_pet.breed = Some("Beagle".to_string());
    new_pet.sex = Some(Sex::Male);
    new_pet.birthdate = Some((Local::now() - Duration::days(3 * 366)).date_naive());
    let pet = pets.create_pet(&new_pet)?;

    let now = Utc::now();
    events.create_event(&NewEvent::new(
        pet.id,
        EventKind::Care,
        "Morning pills",
        now - Duration::minutes(30),
    ))?;
    events.create_event(&NewEvent::new(
        pet.id,
        EventKind::Appointment,
        "Vet check-up",
        now + Duration::days(3),
    ))?;
    events.create_event(&NewEvent::new(
        pet.id,
        EventKind::Watch,
        "Limping on left paw",
        now + Duration::hours(1),
    ))?;

    pets.add_weight(pet.id, 12.4, None)?;
    wellbeing.log_wellbeing(pet.id, 72, None)?;
    wellbeing.log_wellbeing(pet.id, 80, Some("playful"))?;
    Ok(())
}

fn print_dashboard(state: &DashboardState, data: &DashboardData) {
    let now = Local::now();
    let view = state.render(data, &now);

    if let Some(notice) = &view.notice {
        let affordance = if notice.can_retry() { " [retry]" } else { "" };
        println!("! {}: {}{}", notice.title, notice.message, affordance);
    }

    for tile in &view.kpis {
        println!("kpi {:<12} {:>3} {}", tile.title(), tile.count, tile.subtitle());
    }

    for card in &view.pet_cards {
        println!(
            "pet [{}] {} ({}) status={} weight={} wellbeing={}",
            card.initials,
            card.name,
            card.subtitle,
            card.status.label(),
            card.weight_label,
            card.wellbeing_label
        );
    }

    let tabs: Vec<String> = view
        .tabs
        .iter()
        .map(|tab| {
            let marker = if tab.active { "*" } else { "" };
            format!("{marker}{}({})", tab.label, tab.count)
        })
        .collect();
    println!("tabs {}", tabs.join(" "));

    for item in &view.timeline {
        let check = if item.done { "x" } else { " " };
        println!(
            "[{check}] {:<16} {:<6} {}",
            item.time_display, item.kind_label, item.title
        );
    }
    if let Some(empty) = view.timeline_empty {
        println!("{}", empty.title);
        if let Some(hint) = empty.hint {
            println!("  {hint}");
        }
    }

    println!(
        "wellbeing {}/100 last_update={}",
        view.gauge.score, view.gauge.last_update_label
    );
}

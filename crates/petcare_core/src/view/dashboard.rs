//! Dashboard page state and render model.
//!
//! # Responsibility
//! - Load everything the dashboard shows through the services.
//! - Hold transient UI state: expanded pet, timeline tab, carousel, notice.
//! - Derive the full render model from loaded data and an explicit "now".
//!
//! # Invariants
//! - A failing read never aborts loading; the section falls back to empty
//!   data and the failure surfaces as a notice.
//! - At most one pet card is expanded.

use crate::model::event::{Event, EventId};
use crate::model::health::{Issue, Weight, WellbeingStats};
use crate::model::memory::Memory;
use crate::model::pet::{Pet, PetId};
use crate::repo::error::{DataError, DataResult};
use crate::repo::event_repo::EventRepository;
use crate::repo::DataBackend;
use crate::service::event_service::EventService;
use crate::service::memory_service::MemoryService;
use crate::service::pet_service::PetService;
use crate::service::wellbeing_service::WellbeingService;
use crate::timeline::EventRange;
use crate::view::carousel::CarouselState;
use crate::view::kpi::{kpi_tiles, KpiKind, KpiTile};
use crate::view::memories::MemoriesGrid;
use crate::view::notice::Notice;
use crate::view::pet_card::{PetCard, PetCardContext};
use crate::view::timeline::{EmptyState, Tab, TimelineItem, TimelineState};
use crate::view::wellbeing::GaugeView;
use chrono::{DateTime, TimeZone};
use log::warn;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Everything fetched for one dashboard render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub pets: Vec<Pet>,
    /// Events of every range; the timeline categorizes client-side.
    pub events: Vec<Event>,
    pub open_issues: Vec<Issue>,
    pub latest_weights: HashMap<PetId, Weight>,
    pub pet_scores: HashMap<PetId, u8>,
    pub wellbeing: WellbeingStats,
    pub memories: Vec<Memory>,
    pub upload_enabled: bool,
}

impl DashboardData {
    /// Loads every section; returns the data and the read failures met.
    pub fn load<B: DataBackend + ?Sized>(backend: &B) -> (Self, Vec<DataError>) {
        let events = EventService::new(backend);
        let pets = PetService::new(backend);
        let wellbeing = WellbeingService::new(backend);
        let memories = MemoryService::new(backend);

        let mut errors = Vec::new();
        let mut data = Self {
            upload_enabled: backend.is_connected(),
            ..Self::default()
        };

        data.pets = or_default(pets.list_pets(), &mut errors);
        data.events = load_all_events(&events, &data.pets, &mut errors);
        data.open_issues = or_default(wellbeing.list_open_issues(), &mut errors);
        data.wellbeing = or_default(wellbeing.overall_stats(), &mut errors);
        data.memories = or_default(memories.list_memories(), &mut errors);

        for pet in &data.pets {
            if let Some(weight) = or_default(pets.latest_weight(pet.id), &mut errors) {
                data.latest_weights.insert(pet.id, weight);
            }
            let stats = or_default(wellbeing.pet_stats(pet.id), &mut errors);
            if let Some(score) = stats.current_score {
                data.pet_scores.insert(pet.id, score);
            }
        }

        (data, errors)
    }
}

/// Fetches every range, then each pet's events, merging by id in first-seen
/// order. The per-pet pass picks up overdue events that no range lists.
fn load_all_events<R: EventRepository>(
    service: &EventService<R>,
    pets: &[Pet],
    errors: &mut Vec<DataError>,
) -> Vec<Event> {
    let mut merged: Vec<Event> = Vec::new();
    let mut seen: HashSet<EventId> = HashSet::new();
    let mut merge = |batch: Vec<Event>| {
        for event in batch {
            if seen.insert(event.id) {
                merged.push(event);
            }
        }
    };
    for range in EventRange::ALL {
        merge(or_default(service.list_events(range), errors));
    }
    for pet in pets {
        merge(or_default(service.list_events_by_pet(pet.id), errors));
    }
    merged
}

fn or_default<T: Default>(result: DataResult<T>, errors: &mut Vec<DataError>) -> T {
    result.unwrap_or_else(|err| {
        errors.push(err);
        T::default()
    })
}

/// Render-ready dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<'a> {
    pub kpis: [KpiTile; 4],
    pub carousel_indicators: Vec<bool>,
    pub pet_cards: Vec<PetCard>,
    pub tabs: [Tab; 3],
    pub timeline: Vec<TimelineItem>,
    /// Set when the selected tab has no rows.
    pub timeline_empty: Option<EmptyState>,
    pub gauge: GaugeView,
    pub memories: MemoriesGrid<'a>,
    pub notice: Option<Notice>,
}

/// Transient dashboard UI state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    expanded_pet: Option<PetId>,
    timeline: TimelineState,
    carousel: CarouselState,
    notice: Option<Notice>,
}

impl DashboardState {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            expanded_pet: None,
            timeline: TimelineState::new(),
            carousel: CarouselState::new(KpiKind::ALL.len(), viewport_width),
            notice: None,
        }
    }

    pub fn expanded_pet(&self) -> Option<PetId> {
        self.expanded_pet
    }

    /// Expands `pet_id`, or collapses it when it is already expanded.
    pub fn toggle_pet_expansion(&mut self, pet_id: PetId) {
        self.expanded_pet = if self.expanded_pet == Some(pet_id) {
            None
        } else {
            Some(pet_id)
        };
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn select_range(&mut self, range: EventRange) {
        self.timeline.select(range);
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselState {
        &mut self.carousel
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replaces the current notice with one describing `err`.
    pub fn report_error(&mut self, err: &DataError, at: Instant) {
        self.notice = Some(Notice::from_error(err, at));
    }

    /// Records load failures; the first one is shown.
    pub fn report_load_errors(&mut self, errors: &[DataError], at: Instant) {
        if let Some(first) = errors.first() {
            if errors.len() > 1 {
                warn!(
                    "event=dashboard_load module=view status=error failed_sections={}",
                    errors.len()
                );
            }
            self.report_error(first, at);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Drops the notice once it has expired.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Toggles one event through the service.
    ///
    /// On success the caller reloads and re-renders; the event moves between
    /// tabs on that render. On failure the notice is set and `None` returned.
    pub fn toggle_event<R: EventRepository>(
        &mut self,
        service: &EventService<R>,
        id: EventId,
        at: Instant,
    ) -> Option<Event> {
        match service.toggle_event_done(id) {
            Ok(event) => Some(event),
            Err(err) => {
                self.report_error(&err, at);
                None
            }
        }
    }

    pub fn render<'a, Tz: TimeZone>(
        &self,
        data: &'a DashboardData,
        now: &DateTime<Tz>,
    ) -> DashboardView<'a>
    where
        Tz::Offset: std::fmt::Display,
    {
        let pet_cards = data
            .pets
            .iter()
            .map(|pet| {
                let context = PetCardContext {
                    events: &data.events,
                    issues: &data.open_issues,
                    latest_weight: data.latest_weights.get(&pet.id),
                    wellbeing_score: data.pet_scores.get(&pet.id).copied(),
                    expanded: self.expanded_pet == Some(pet.id),
                };
                PetCard::build(pet, context, now)
            })
            .collect();

        let timeline = self.timeline.items(&data.events, now);
        let timeline_empty = timeline.is_empty().then(|| self.timeline.empty_state());

        DashboardView {
            kpis: kpi_tiles(&data.events, now),
            carousel_indicators: self.carousel.indicators(),
            pet_cards,
            tabs: self.timeline.tabs(&data.events, now),
            timeline,
            timeline_empty,
            gauge: GaugeView::from_stats(&data.wellbeing, &now.timezone()),
            memories: MemoriesGrid::build(&data.memories, data.upload_enabled),
            notice: self.notice.clone(),
        }
    }
}

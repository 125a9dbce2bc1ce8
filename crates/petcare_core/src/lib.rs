//! Core domain logic for the pet-care dashboard.
//! This crate owns the data-access contracts, the event categorizer and the
//! view-state derivations; UI layers only render what it produces.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timeline;
pub mod view;

pub use config::{AppConfig, BackendKind, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId, EventKind, EventPatch, NewEvent};
pub use model::health::{Issue, Severity, Trend, Weight, WellbeingLog, WellbeingStats};
pub use model::memory::{Memory, NewMemory};
pub use model::pet::{NewPet, Pet, PetId, PetPatch, Sex, Species};
pub use model::validation::ValidationError;
pub use repo::disconnected::DisconnectedBackend;
pub use repo::error::{DataError, DataResult};
pub use repo::event_repo::EventRepository;
pub use repo::health_repo::HealthRepository;
pub use repo::in_memory::InMemoryBackend;
pub use repo::memory_repo::MemoryRepository;
pub use repo::pet_repo::PetRepository;
pub use repo::DataBackend;
pub use service::event_service::EventService;
pub use service::memory_service::MemoryService;
pub use service::pet_service::PetService;
pub use service::wellbeing_service::WellbeingService;
pub use timeline::{
    categorize, classify, format_event_time, matches_range, tab_counts, EventRange, TabCounts,
};
pub use view::dashboard::{DashboardData, DashboardState, DashboardView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

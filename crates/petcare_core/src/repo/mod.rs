//! Data-access contracts and backend implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record family.
//! - Provide the disconnected stub backend and an in-process backend.
//!
//! # Invariants
//! - Mutations without a configured backend fail with `DataError::NotConnected`.
//! - Reads without a configured backend return empty results, never errors.
//! - Write paths validate payloads before touching storage.

pub mod disconnected;
pub mod error;
pub mod event_repo;
pub mod health_repo;
pub mod in_memory;
pub mod memory_repo;
pub mod pet_repo;

use crate::repo::event_repo::EventRepository;
use crate::repo::health_repo::HealthRepository;
use crate::repo::memory_repo::MemoryRepository;
use crate::repo::pet_repo::PetRepository;

/// Every data-access contract at once, for callers that hold one backend.
pub trait DataBackend: EventRepository + PetRepository + HealthRepository + MemoryRepository {
    /// Short backend name for diagnostics.
    fn backend_name(&self) -> &'static str;

    /// Whether mutations can succeed at all.
    fn is_connected(&self) -> bool;
}

//! Domain records for the pet-care dashboard.
//!
//! # Responsibility
//! - Define the canonical records shared by data-access and view layers.
//! - Keep wire field names aligned with the external table schema.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - Timestamps are stored in UTC; calendar-day logic converts at the edge.

pub mod event;
pub mod health;
pub mod memory;
pub mod pet;
pub mod validation;

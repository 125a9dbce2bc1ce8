//! View-state derivation for the dashboard.
//!
//! # Responsibility
//! - Turn records and transient UI state into render-ready values.
//! - Own the transient UI state (selected tab, expanded pet, carousel index,
//!   current notice); nothing here is persisted.
//!
//! # Invariants
//! - Derivations are pure functions of their inputs and an explicit "now".

pub mod carousel;
pub mod dashboard;
pub mod kpi;
pub mod memories;
pub mod notice;
pub mod pet_card;
pub mod timeline;
pub mod wellbeing;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Emit metadata-only log events for every mutation.
//! - Keep view code decoupled from backend details.
//!
//! # Invariants
//! - Services never swallow errors: a failing read from a real backend
//!   reaches the caller as `DataError::Generic`.

pub mod event_service;
pub mod memory_service;
pub mod pet_service;
pub mod wellbeing_service;

use crate::repo::error::{DataError, DataResult};
use log::{info, warn};
use std::time::Instant;

/// Logs the outcome of one service mutation and passes the result through.
///
/// `NotConnected` is an expected state and logs at `info`; everything else
/// that fails logs at `warn`.
pub(crate) fn log_mutation<T>(
    event: &str,
    started_at: Instant,
    result: DataResult<T>,
) -> DataResult<T> {
    let duration_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => info!("event={event} module=service status=ok duration_ms={duration_ms}"),
        Err(err @ DataError::NotConnected(_)) => info!(
            "event={event} module=service status=error duration_ms={duration_ms} error_kind={}",
            err.kind()
        ),
        Err(err @ DataError::Generic(_)) => warn!(
            "event={event} module=service status=error duration_ms={duration_ms} error_kind={} error={err}",
            err.kind()
        ),
    }
    result
}

/// Logs a failing read; successful reads stay silent.
pub(crate) fn log_read<T>(event: &str, result: DataResult<T>) -> DataResult<T> {
    if let Err(err) = &result {
        warn!(
            "event={event} module=service status=error error_kind={} error={err}",
            err.kind()
        );
    }
    result
}

//! Data-layer error type.
//!
//! # Invariants
//! - `NotConnected` is reserved for "no backend configured" and is never retried.
//! - Every other failure is `Generic` and may be retried by the caller.

use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type DataResult<T> = Result<T, DataError>;

/// Default message when no operation-specific text is available.
pub const NOT_CONNECTED_MESSAGE: &str =
    "no backend is connected yet; connect a data backend to enable this functionality";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Mutation attempted while no backend is configured.
    NotConnected(String),
    /// Unexpected failure (validation, missing record, backend error).
    Generic(String),
}

impl DataError {
    /// `NotConnected` for one operation, e.g. `not_connected("create event")`.
    pub fn not_connected(operation: &str) -> Self {
        Self::NotConnected(format!(
            "cannot {operation} - backend connection required"
        ))
    }

    pub fn not_found(record: &str, id: Uuid) -> Self {
        Self::Generic(format!("{record} not found: {id}"))
    }

    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected(_))
    }

    /// Whether a retry affordance makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generic(_))
    }

    /// Stable `error_kind` value for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConnected(_) => "not_connected",
            Self::Generic(_) => "generic",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotConnected(message) | Self::Generic(message) => message,
        }
    }
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for DataError {}

impl From<ValidationError> for DataError {
    fn from(value: ValidationError) -> Self {
        Self::Generic(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::DataError;
    use crate::model::validation::ValidationError;

    #[test]
    fn not_connected_is_not_retryable() {
        let err = DataError::not_connected("create event");
        assert!(err.is_not_connected());
        assert!(!err.is_retryable());
        assert_eq!(err.kind(), "not_connected");
        assert_eq!(
            err.to_string(),
            "cannot create event - backend connection required"
        );
    }

    #[test]
    fn validation_maps_to_generic() {
        let err = DataError::from(ValidationError::EmptyEventTitle);
        assert!(err.is_retryable());
        assert_eq!(err.message(), "event title must not be empty");
    }
}

//! User-facing notices for data-layer failures.
//!
//! # Invariants
//! - `NotConnected` becomes an informational connect prompt that is never
//!   retried and dismisses itself after `NOTICE_TTL`.
//! - Any other failure becomes a retryable error that stays until dismissed.

use crate::repo::error::DataError;
use std::time::{Duration, Instant};

/// Lifetime of an informational notice.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// "Connect your backend" prompt.
    ConnectBackend,
    /// Unexpected failure with a retry affordance.
    Retryable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
    raised_at: Instant,
}

impl Notice {
    pub fn from_error(err: &DataError, raised_at: Instant) -> Self {
        match err {
            DataError::NotConnected(message) => Self {
                kind: NoticeKind::ConnectBackend,
                title: "Connection required",
                message: message.clone(),
                raised_at,
            },
            DataError::Generic(message) => Self {
                kind: NoticeKind::Retryable,
                title: "Something went wrong",
                message: message.clone(),
                raised_at,
            },
        }
    }

    pub fn can_retry(&self) -> bool {
        self.kind == NoticeKind::Retryable
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.kind == NoticeKind::ConnectBackend
            && now.saturating_duration_since(self.raised_at) >= NOTICE_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeKind, NOTICE_TTL};
    use crate::repo::error::DataError;
    use std::time::{Duration, Instant};

    #[test]
    fn not_connected_is_an_expiring_prompt() {
        let raised = Instant::now();
        let notice = Notice::from_error(&DataError::not_connected("log wellbeing"), raised);
        assert_eq!(notice.kind, NoticeKind::ConnectBackend);
        assert!(!notice.can_retry());
        assert!(!notice.is_expired(raised + Duration::from_secs(1)));
        assert!(notice.is_expired(raised + NOTICE_TTL));
    }

    #[test]
    fn generic_error_is_retryable_and_sticky() {
        let raised = Instant::now();
        let notice = Notice::from_error(&DataError::Generic("timeout".to_string()), raised);
        assert!(notice.can_retry());
        assert_eq!(notice.message, "timeout");
        assert!(!notice.is_expired(raised + Duration::from_secs(60)));
    }
}

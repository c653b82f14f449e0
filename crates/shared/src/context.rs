//! Request-scoped context passed across boundaries.
//!
//! Validation itself is synchronous and never observes the context; the
//! boundary use-cases read it to tag log events and to stop before persisting
//! once a request has been cancelled.

use crate::{ErrorCode, ErrorEnvelope, Result};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// A correlation identifier used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(Arc<str>);

impl CorrelationId {
    /// Parse a correlation identifier from user input.
    ///
    /// The value is trimmed; empty values are rejected.
    pub fn parse(value: impl AsRef<str>) -> Result<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ErrorEnvelope::expected(
                ErrorCode::invalid_input(),
                "correlationId must be non-empty",
            ));
        }
        Ok(Self(Arc::<str>::from(trimmed)))
    }

    /// Create a new request id, best-effort unique within this process.
    #[must_use]
    pub fn new_request_id() -> Self {
        let n = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(Arc::<str>::from(format!("req_{n}")))
    }

    /// Borrow the identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Request-scoped context: correlation id plus a shared cancellation flag.
#[derive(Debug, Clone)]
pub struct RequestContext {
    correlation_id: CorrelationId,
    cancelled: Arc<AtomicBool>,
}

impl RequestContext {
    /// Create a new request context in the non-cancelled state.
    #[must_use]
    pub fn new(correlation_id: CorrelationId) -> Self {
        Self {
            correlation_id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Convenience constructor: create a context with an auto-generated `req_*` id.
    #[must_use]
    pub fn new_request() -> Self {
        Self::new(CorrelationId::new_request_id())
    }

    /// Return the correlation id.
    #[must_use]
    pub const fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Returns true if the request was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Cancel this request (visible to every clone of the context).
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Fail with a cancellation error when the request was cancelled.
    pub fn ensure_not_cancelled(&self, operation: &'static str) -> Result<()> {
        crate::check_cancelled(self.is_cancelled()).map_err(|error| {
            error
                .with_metadata("operation", operation)
                .with_metadata("correlationId", self.correlation_id.as_str())
        })
    }
}

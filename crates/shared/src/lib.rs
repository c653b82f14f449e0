//! # destination-guard-shared
//!
//! Shared utilities, result types, and error handling for the destination-guard workspace.
//!
//! This crate provides foundational types that are used across all other crates:
//!
//! - Result and error envelope types
//! - Validation proof wrappers
//! - Secret detection and redaction
//! - Request-scoped context (correlation + cancellation)
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Zero-cost abstractions** - Types should compile away to efficient code
//! 3. **Serde-compatible** - Error types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod context;
pub mod errors;
pub mod invariants;
pub mod redaction;
pub mod result;

pub use context::{CorrelationId, RequestContext};
pub use errors::{
    ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata, FIELD_METADATA_KEY,
    check_cancelled,
};
pub use invariants::Validated;
pub use redaction::{REDACTED, is_secret_key, redact_if_secret};
pub use result::{Result, ResultExt};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

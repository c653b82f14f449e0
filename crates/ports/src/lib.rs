//! # destination-guard-ports
//!
//! Port traits for the destination-guard hexagonal architecture.
//!
//! This crate defines the interfaces between the domain and infrastructure
//! layers. It depends only on `domain` and `shared`.
//!
//! - `LoggerPort` - structured, redacted event logging
//! - `DestinationStorePort` - persistence of validated destinations

use std::future::Future;
use std::pin::Pin;

/// Boxed future used by port traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Returns the ports crate version.
#[must_use]
pub const fn ports_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod destination_store;
pub mod logger;

pub use destination_store::*;
pub use logger::*;

// Re-export selected domain types used in port signatures, so adapter crates
// can implement ports without directly depending on `destination-guard-domain`.
pub use destination_guard_domain::DestinationId;

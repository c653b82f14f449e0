//! # destination-guard-adapters
//!
//! Adapter implementations for ports: the structured JSON logger with its
//! sinks, and an in-memory destination store for tests and local use.
//! This crate depends on `ports`, `shared`, `domain` and `config`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod log_sink;
pub mod logger;
/// In-memory `DestinationStorePort` implementation.
pub mod memory_store;

pub use log_sink::{LogSink, MemoryLogSink, StderrLogSink};
pub use logger::{JsonLogger, SERVICE_FIELD, level_from_config};
pub use memory_store::InMemoryDestinationStore;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

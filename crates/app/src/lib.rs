//! # destination-guard-app
//!
//! Boundary use cases around the validation engine: create, replace and
//! patch a destination through a `DestinationStorePort`.
//! This crate depends on `ports`, `domain`, `validation`, `config`, and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod create_destination;
pub mod deps;
mod observe;
pub mod patch_destination;
pub mod replace_destination;

pub use create_destination::create_destination;
pub use deps::DestinationDeps;
pub use patch_destination::patch_destination;
pub use replace_destination::replace_destination;

/// Returns the app crate version.
#[must_use]
pub const fn app_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

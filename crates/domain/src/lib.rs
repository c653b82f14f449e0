//! # destination-guard-domain
//!
//! Domain vocabulary for destination validation.
//!
//! - **Clouds and products** - `Cloud`, `Product`
//! - **Compatibility** - which products each cloud hosts
//! - **Auth discriminators** - `S3AuthType`, `GcsAuthType`, `PrincipalType`
//! - **Primitives** - `DestinationId`
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use destination_guard_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod auth;
pub mod cloud;
pub mod compatibility;
pub mod primitives;
pub mod vocabulary;

pub use auth::{GcsAuthType, PrincipalType, S3AuthType};
pub use cloud::{Cloud, Product};
pub use compatibility::{clouds_for, is_supported, products_for, products_for_name};
pub use primitives::{DestinationId, PrimitiveError};
pub use vocabulary::ClosedSet;

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_crate_version_matches_shared() {
        assert_eq!(domain_crate_version(), shared_crate_version());
    }
}

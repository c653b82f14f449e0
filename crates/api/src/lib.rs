//! # destination-guard-api
//!
//! API data transfer objects and wire formats for the destination boundary.
//! This crate depends only on `domain` and `shared`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

/// API v1 DTOs.
pub mod v1;

/// Returns the api crate version.
#[must_use]
pub const fn api_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use destination_guard_domain::domain_crate_version;
    use destination_guard_shared::shared_crate_version;

    #[test]
    fn api_crate_compiles() {
        let version = api_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn api_can_use_domain_and_shared() {
        let domain_version = domain_crate_version();
        let shared_version = shared_crate_version();

        assert!(!domain_version.is_empty());
        assert!(!shared_version.is_empty());
    }
}

//! # destination-guard-config
//!
//! Runtime configuration for the destination-guard boundary: logging level,
//! service name and rejection logging. Validation rule tables are compiled in
//! and are not part of this config.
//! This crate depends on `shared` only.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file + overrides).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;
/// JSON Schema export.
pub mod schema_export;

pub use env::{
    ENV_LOG_LEVEL, ENV_LOG_REJECTIONS, ENV_SERVICE_NAME, EnvParseError, GuardEnv,
    apply_env_overrides,
};
pub use load::{
    load_guard_config_from_path, load_guard_config_from_sources, load_guard_config_std_env,
    to_pretty_json, to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, ConfigSchemaError, DEFAULT_SERVICE_NAME, GuardConfig, LogLevelName,
    LoggingConfig, ValidatedGuardConfig, ValidationConfig, parse_guard_config_json,
    parse_guard_config_toml,
};
pub use schema_export::guard_config_schema;

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use destination_guard_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        let version = config_crate_version();
        assert!(!version.is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}

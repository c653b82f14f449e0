//! Runtime configuration schema, defaults, validation, and normalization.
//!
//! - Deserialization uses `serde` (JSON or TOML).
//! - Validation is manual and returns typed errors mapped to `ErrorEnvelope`.
//! - The validation rule tables themselves are not configurable.

use destination_guard_shared::{ErrorCode, ErrorEnvelope, Validated};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current supported configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Service name stamped on every log event by default.
pub const DEFAULT_SERVICE_NAME: &str = "destination-guard";

const SERVICE_NAME_MAX_LEN: usize = 128;

/// Minimum log level name accepted in config and env.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevelName {
    /// Debug and above.
    Debug,
    /// Info and above.
    #[default]
    Info,
    /// Warn and above.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevelName {
    /// Lowercase config spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse a level name (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct GuardConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Structured logging settings.
    pub logging: LoggingConfig,
    /// Validation boundary settings.
    pub validation: ValidationConfig,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            logging: LoggingConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

/// Structured logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Minimum level emitted by the JSON logger.
    pub level: LogLevelName,
    /// Value of the `service` base field on every event.
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevelName::default(),
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
        }
    }
}

/// Validation boundary settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ValidationConfig {
    /// Emit a `destination.validate.rejected` event for every rejected payload.
    pub log_rejections: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            log_rejections: true,
        }
    }
}

/// Validated config proof.
pub type ValidatedGuardConfig = Validated<GuardConfig>;

impl GuardConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedGuardConfig, ConfigSchemaError> {
        self.validate_version()?;
        self.logging.normalize_and_validate()?;
        Ok(Validated::new(self))
    }

    const fn validate_version(&self) -> Result<(), ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn normalize_and_validate(&mut self) -> Result<(), ConfigSchemaError> {
        let trimmed = self.service_name.trim();
        if trimmed.is_empty() {
            return Err(ConfigSchemaError::EmptyField {
                section: "logging",
                field: "serviceName",
            });
        }
        if trimmed.len() > SERVICE_NAME_MAX_LEN {
            return Err(ConfigSchemaError::FieldTooLong {
                section: "logging",
                field: "serviceName",
                len: trimmed.len(),
                max: SERVICE_NAME_MAX_LEN,
            });
        }
        self.service_name = trimmed.to_owned();
        Ok(())
    }
}

/// Parse and validate a JSON config document.
pub fn parse_guard_config_json(input: &str) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let config: GuardConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;
    config.validate_and_normalize().map_err(Into::into)
}

/// Parse and validate a TOML config document.
pub fn parse_guard_config_toml(input: &str) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let config: GuardConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;
    config.validate_and_normalize().map_err(Into::into)
}

/// Schema-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this binary.
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A required string is empty after trimming.
    EmptyField {
        /// Schema section (e.g. `logging`).
        section: &'static str,
        /// Field name in the config file (e.g. `serviceName`).
        field: &'static str,
    },
    /// A string exceeds its maximum length.
    FieldTooLong {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
        /// Length after trimming.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedVersion { .. } => ErrorCode::new("config", "unsupported_version"),
            Self::EmptyField { .. } => ErrorCode::new("config", "empty_field"),
            Self::FieldTooLong { .. } => ErrorCode::new("config", "field_too_long"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                formatter,
                "config version {found} is not supported (expected {supported})"
            ),
            Self::EmptyField { section, field } => {
                write!(formatter, "{section}.{field} must be non-empty")
            },
            Self::FieldTooLong {
                section,
                field,
                max,
                ..
            } => write!(
                formatter,
                "{section}.{field} must be at most {max} characters"
            ),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => envelope
                .with_metadata("found", found.to_string())
                .with_metadata("supported", supported.to_string()),
            ConfigSchemaError::EmptyField { section, field } => envelope
                .with_metadata("section", section)
                .with_metadata("field", field),
            ConfigSchemaError::FieldTooLong {
                section,
                field,
                len,
                max,
            } => envelope
                .with_metadata("section", section)
                .with_metadata("field", field)
                .with_metadata("len", len.to_string())
                .with_metadata("max", max.to_string()),
        }
    }
}

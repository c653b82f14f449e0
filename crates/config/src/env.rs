//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: present-but-blank or malformed values fail fast
//! instead of silently falling back to the file config.

use crate::schema::{GuardConfig, LogLevelName, ValidatedGuardConfig};
use destination_guard_shared::{ErrorCode, ErrorEnvelope, redact_if_secret};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: minimum log level (`debug`, `info`, `warn`, `error`).
pub const ENV_LOG_LEVEL: &str = "DESTINATION_GUARD_LOG_LEVEL";
/// Env var: service name stamped on log events.
pub const ENV_SERVICE_NAME: &str = "DESTINATION_GUARD_SERVICE_NAME";
/// Env var: toggle rejection logging.
pub const ENV_LOG_REJECTIONS: &str = "DESTINATION_GUARD_LOG_REJECTIONS";

const ALL_ENV_VARS: [&str; 3] = [ENV_LOG_LEVEL, ENV_SERVICE_NAME, ENV_LOG_REJECTIONS];

/// Parsed env overrides. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardEnv {
    /// Override for `logging.level`.
    pub log_level: Option<LogLevelName>,
    /// Override for `logging.serviceName`.
    pub service_name: Option<Box<str>>,
    /// Override for `validation.logRejections`.
    pub log_rejections: Option<bool>,
}

impl GuardEnv {
    /// Parse overrides from an explicit map (tests, embedding hosts).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            log_level: parse_optional_level(map, ENV_LOG_LEVEL)?,
            service_name: parse_optional_trimmed_string(map, ENV_SERVICE_NAME)?,
            log_rejections: parse_optional_bool(map, ENV_LOG_REJECTIONS)?,
        })
    }

    /// Parse overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_ENV_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_owned(), value);
            }
        }
        Self::from_map(&map)
    }

    /// Returns true when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.log_level.is_none() && self.service_name.is_none() && self.log_rejections.is_none()
    }
}

/// Apply env overrides on top of a base config, then validate the result.
pub fn apply_env_overrides(
    base: GuardConfig,
    env: &GuardEnv,
) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(level) = env.log_level {
        config.logging.level = level;
    }
    if let Some(service_name) = env.service_name.as_deref() {
        config.logging.service_name = service_name.to_owned();
    }
    if let Some(log_rejections) = env.log_rejections {
        config.validation.log_rejections = log_rejections;
    }

    config.validate_and_normalize().map_err(Into::into)
}

/// Env parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an unsupported value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", redact_if_secret(var, &value))
            },
        }
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.to_owned().into_boxed_str()))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: raw.clone(),
        }),
    }
}

fn parse_optional_level(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<LogLevelName>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    LogLevelName::parse(raw)
        .map(Some)
        .ok_or_else(|| EnvParseError::InvalidEnum {
            var,
            value: raw.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn env_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[test]
    fn empty_map_yields_no_overrides() -> Result<(), Box<dyn Error>> {
        let env = GuardEnv::from_map(&BTreeMap::new())?;
        assert!(env.is_empty());
        Ok(())
    }

    #[test]
    fn bool_aliases_are_accepted() -> Result<(), Box<dyn Error>> {
        for (raw, expected) in [("YES", true), ("on", true), ("0", false), ("Off", false)] {
            let env = GuardEnv::from_map(&env_map(&[(ENV_LOG_REJECTIONS, raw)]))?;
            assert_eq!(env.log_rejections, Some(expected));
        }
        Ok(())
    }

    #[test]
    fn invalid_bool_reports_env_var() {
        let error = GuardEnv::from_map(&env_map(&[(ENV_LOG_REJECTIONS, "maybe")])).err();
        assert_eq!(
            error,
            Some(EnvParseError::InvalidBool {
                var: ENV_LOG_REJECTIONS,
                value: "maybe".to_owned(),
            })
        );
    }

    #[test]
    fn blank_service_name_is_rejected() {
        let error = GuardEnv::from_map(&env_map(&[(ENV_SERVICE_NAME, "  ")])).err();
        assert_eq!(
            error,
            Some(EnvParseError::EmptyValue {
                var: ENV_SERVICE_NAME
            })
        );
    }

    #[test]
    fn unknown_level_maps_to_invalid_enum_envelope() {
        let error = GuardEnv::from_map(&env_map(&[(ENV_LOG_LEVEL, "trace")]))
            .err()
            .map(ErrorEnvelope::from);
        assert!(matches!(
            error,
            Some(ref envelope) if envelope.code == ErrorCode::new("config", "invalid_env_enum")
                && envelope.metadata.get("value").map(String::as_str) == Some("trace")
        ));
    }

    #[test]
    fn overrides_replace_file_values() -> Result<(), Box<dyn Error>> {
        let env = GuardEnv::from_map(&env_map(&[
            (ENV_LOG_LEVEL, "warn"),
            (ENV_SERVICE_NAME, " dest-api "),
            (ENV_LOG_REJECTIONS, "false"),
        ]))?;
        let config = apply_env_overrides(GuardConfig::default(), &env)?;
        assert_eq!(config.logging.level, LogLevelName::Warn);
        assert_eq!(config.logging.service_name, "dest-api");
        assert!(!config.validation.log_rejections);
        Ok(())
    }
}

//! Config loading helpers (env + file + overrides).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{GuardConfig, GuardEnv, LogLevelName, ValidatedGuardConfig, apply_env_overrides};
use destination_guard_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Load the guard config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`GuardEnv`)
/// - overrides JSON (partial config)
/// - config JSON (file content)
/// - defaults (`GuardConfig::default()`)
pub fn load_guard_config_from_sources(
    config_json: Option<&str>,
    overrides_json: Option<&str>,
    env: &GuardEnv,
) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let mut config = match config_json {
        None => GuardConfig::default(),
        Some(input) => parse_config_unvalidated(input, ConfigFormat::Json)?,
    };

    if let Some(input) = overrides_json {
        let overrides = parse_overrides_json(input)?;
        overrides.apply(&mut config);
    }

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Load the guard config from an optional file path (`.json` or `.toml`).
#[tracing::instrument(level = "debug", skip(overrides_json, env))]
pub fn load_guard_config_from_path(
    config_path: Option<&Path>,
    overrides_json: Option<&str>,
    env: &GuardEnv,
) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let mut config = match config_path {
        None => GuardConfig::default(),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            tracing::debug!(format = format.as_str(), "parsing config file");
            parse_config_unvalidated(&config_text, format)?
        },
    };

    if let Some(input) = overrides_json {
        let overrides = parse_overrides_json(input)?;
        overrides.apply(&mut config);
    }

    apply_env_overrides(config, env)
}

/// Load the guard config from std env and an optional file path.
pub fn load_guard_config_std_env(
    config_path: Option<&Path>,
    overrides_json: Option<&str>,
) -> Result<ValidatedGuardConfig, ErrorEnvelope> {
    let env = GuardEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_guard_config_from_path(config_path, overrides_json, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &GuardConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &GuardConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

fn parse_config_unvalidated(
    input: &str,
    format: ConfigFormat,
) -> Result<GuardConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn parse_overrides_json(input: &str) -> Result<GuardConfigOverrides, ErrorEnvelope> {
    serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid overrides JSON: {error}"),
        )
        .with_metadata("source", "overrides")
    })
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct GuardConfigOverrides {
    version: Option<u32>,
    logging: LoggingOverrides,
    validation: ValidationOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct LoggingOverrides {
    level: Option<LogLevelName>,
    service_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct ValidationOverrides {
    log_rejections: Option<bool>,
}

impl GuardConfigOverrides {
    fn apply(self, config: &mut GuardConfig) {
        if let Some(version) = self.version {
            config.version = version;
        }
        if let Some(level) = self.logging.level {
            config.logging.level = level;
        }
        if let Some(service_name) = self.logging.service_name {
            config.logging.service_name = service_name;
        }
        if let Some(log_rejections) = self.validation.log_rejections {
            config.validation.log_rejections = log_rejections;
        }
    }
}

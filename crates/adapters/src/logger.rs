//! Structured JSON logger adapter.
//!
//! Every key that looks like a secret is redacted recursively before the line
//! is written, so destination `auth` objects never reach a sink.

use crate::log_sink::LogSink;
use destination_guard_config::{LogLevelName, LoggingConfig};
use destination_guard_ports::{LogEvent, LogFields, LogLevel, LoggerPort};
use destination_guard_shared::redaction::{REDACTED, is_secret_key};
use serde_json::Value;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Base field carrying the configured service name.
pub const SERVICE_FIELD: &str = "service";

/// JSON logger emitting one line per event.
#[derive(Clone)]
pub struct JsonLogger {
    sink: Arc<dyn LogSink>,
    base_fields: LogFields,
    min_level: LogLevel,
}

impl JsonLogger {
    /// Create a JSON logger backed by the provided sink.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            base_fields: LogFields::new(),
            min_level: LogLevel::Info,
        }
    }

    /// Build a logger from the `logging` config section.
    #[must_use]
    pub fn from_config(config: &LoggingConfig, sink: Arc<dyn LogSink>) -> Self {
        let mut base_fields = LogFields::new();
        base_fields.insert(
            SERVICE_FIELD.to_owned().into_boxed_str(),
            Value::String(config.service_name.clone()),
        );
        Self::new(sink)
            .with_base_fields(base_fields)
            .with_min_level(level_from_config(config.level))
    }

    /// Set base fields applied to every event.
    #[must_use]
    pub fn with_base_fields(mut self, fields: LogFields) -> Self {
        self.base_fields = fields;
        self
    }

    /// Set the minimum log level.
    #[must_use]
    pub const fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }
}

impl LoggerPort for JsonLogger {
    fn log(&self, event: LogEvent) {
        if event.level < self.min_level {
            return;
        }

        let mut fields = self.base_fields.clone();
        if let Some(extra) = event.fields {
            fields.extend(extra);
        }
        redact_fields(&mut fields);

        let mut error = event.error;
        if let Some(ref mut value) = error {
            redact_value(value);
        }

        let mut payload = serde_json::Map::new();
        payload.insert("timestampMs".to_string(), Value::from(now_epoch_ms()));
        payload.insert(
            "level".to_string(),
            Value::String(event.level.as_str().to_string()),
        );
        payload.insert("event".to_string(), Value::String(event.event.into_string()));
        payload.insert(
            "message".to_string(),
            Value::String(event.message.into_string()),
        );
        if !fields.is_empty() {
            payload.insert("fields".to_string(), fields_to_json(fields));
        }
        if let Some(error) = error {
            payload.insert("error".to_string(), error);
        }

        let line = serde_json::to_string(&Value::Object(payload)).map_or_else(
            |_| {
                "{\"timestampMs\":0,\"level\":\"error\",\"event\":\"logger.serialize_failed\",\"message\":\"log serialization failed\"}\n"
                    .to_string()
            },
            |mut encoded| {
                encoded.push('\n');
                encoded
            },
        );
        self.sink.write_line(&line);
    }

    fn child(&self, fields: LogFields) -> Box<dyn LoggerPort> {
        let mut merged = self.base_fields.clone();
        merged.extend(fields);
        Box::new(Self {
            sink: Arc::clone(&self.sink),
            base_fields: merged,
            min_level: self.min_level,
        })
    }
}

/// Map the config level name onto the port level.
#[must_use]
pub const fn level_from_config(level: LogLevelName) -> LogLevel {
    match level {
        LogLevelName::Debug => LogLevel::Debug,
        LogLevelName::Info => LogLevel::Info,
        LogLevelName::Warn => LogLevel::Warn,
        LogLevelName::Error => LogLevel::Error,
    }
}

fn fields_to_json(fields: LogFields) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key.into_string(), value))
            .collect(),
    )
}

fn redact_fields(fields: &mut LogFields) {
    for (key, value) in fields.iter_mut() {
        if is_secret_key(key) {
            *value = Value::String(REDACTED.to_string());
        } else {
            redact_value(value);
        }
    }
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map.iter_mut() {
                if is_secret_key(key) {
                    *nested = Value::String(REDACTED.to_string());
                } else {
                    redact_value(nested);
                }
            }
        },
        Value::Array(items) => {
            for item in items {
                redact_value(item);
            }
        },
        _ => {},
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|duration| u64::try_from(duration.as_millis()).ok())
        .unwrap_or_default()
}

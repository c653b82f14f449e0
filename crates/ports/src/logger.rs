//! Structured logging boundary contract.

use destination_guard_shared::ErrorEnvelope;
use std::collections::BTreeMap;
use std::fmt;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug.
    Debug,
    /// Info.
    Info,
    /// Warn.
    Warn,
    /// Error.
    Error,
}

impl LogLevel {
    /// Lowercase name used on the wire and in config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse a level name (case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Additional event fields.
pub type LogFields = BTreeMap<Box<str>, serde_json::Value>;

/// Structured log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Stable event name.
    pub event: Box<str>,
    /// Severity.
    pub level: LogLevel,
    /// Human-readable message (safe, redacted).
    pub message: Box<str>,
    /// Optional structured fields.
    pub fields: Option<LogFields>,
    /// Optional error payload.
    pub error: Option<serde_json::Value>,
}

impl LogEvent {
    /// Build an event without fields or error.
    #[must_use]
    pub fn new(event: &str, level: LogLevel, message: &str) -> Self {
        Self {
            event: event.to_owned().into_boxed_str(),
            level,
            message: message.to_owned().into_boxed_str(),
            fields: None,
            error: None,
        }
    }

    /// Attach structured fields.
    #[must_use]
    pub fn with_fields(mut self, fields: LogFields) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Attach an error envelope as the event's error payload.
    #[must_use]
    pub fn with_error(mut self, error: &ErrorEnvelope) -> Self {
        self.error = serde_json::to_value(error).ok();
        self
    }
}

/// Boundary contract for structured logging.
pub trait LoggerPort: Send + Sync {
    /// Emit a structured event.
    fn log(&self, event: LogEvent);

    /// Create a child logger with base fields applied to every event.
    fn child(&self, fields: LogFields) -> Box<dyn LoggerPort>;

    /// Convenience: debug event.
    fn debug(&self, event: &str, message: &str, fields: Option<LogFields>) {
        self.log(LogEvent {
            fields,
            ..LogEvent::new(event, LogLevel::Debug, message)
        });
    }

    /// Convenience: info event.
    fn info(&self, event: &str, message: &str, fields: Option<LogFields>) {
        self.log(LogEvent {
            fields,
            ..LogEvent::new(event, LogLevel::Info, message)
        });
    }

    /// Convenience: warn event.
    fn warn(&self, event: &str, message: &str, fields: Option<LogFields>) {
        self.log(LogEvent {
            fields,
            ..LogEvent::new(event, LogLevel::Warn, message)
        });
    }

    /// Convenience: error event.
    fn error(&self, event: &str, message: &str, fields: Option<LogFields>) {
        self.log(LogEvent {
            fields,
            ..LogEvent::new(event, LogLevel::Error, message)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use destination_guard_shared::ErrorCode;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(LogLevel::parse(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn events_carry_serialized_envelopes() {
        let envelope = ErrorEnvelope::expected(ErrorCode::not_found(), "missing");
        let event = LogEvent::new("destination.store.failed", LogLevel::Error, "boom")
            .with_error(&envelope);
        let code = event
            .error
            .as_ref()
            .and_then(|error| error.get("message"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(code, Some("missing"));
    }
}

//! Validation failures and their mapping into `ErrorEnvelope`.

use crate::path::FieldPath;
use destination_guard_shared::{ErrorCode, ErrorEnvelope, FIELD_METADATA_KEY, redact_if_secret};
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A mandatory top-level field (or `auth.type`) is absent or empty.
    MissingField,
    /// A value is outside its closed vocabulary.
    InvalidEnumValue,
    /// `auth` or one of its nested parts has the wrong JSON shape.
    MalformedAuthStructure,
    /// A nested collection or element key is absent or empty.
    MissingNestedField,
    /// Keys required by the selected auth type are absent.
    MissingAuthKeys,
}

impl ValidationErrorKind {
    /// Stable snake-case code used in error envelopes.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::MalformedAuthStructure => "malformed_auth_structure",
            Self::MissingNestedField => "missing_nested_field",
            Self::MissingAuthKeys => "missing_auth_keys",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_code())
    }
}

/// The single failure reported by a validation call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationValidationError {
    /// A mandatory field is absent or empty.
    #[error("{message}")]
    MissingField {
        /// Path of the missing field.
        field: FieldPath,
        /// Human-readable message.
        message: String,
    },
    /// A value is not a member of its closed vocabulary.
    #[error("{message}")]
    InvalidEnumValue {
        /// Path of the offending value.
        field: FieldPath,
        /// The rejected value, rendered.
        value: String,
        /// Human-readable message.
        message: String,
    },
    /// Wrong JSON shape where an object or list is required.
    #[error("{message}")]
    MalformedAuthStructure {
        /// Path of the malformed part.
        field: FieldPath,
        /// Human-readable message.
        message: String,
    },
    /// A nested collection or element key is absent or empty.
    #[error("{message}")]
    MissingNestedField {
        /// Path of the missing nested field.
        field: FieldPath,
        /// Human-readable message.
        message: String,
    },
    /// Keys required by the selected auth type are absent.
    #[error("{message}")]
    MissingAuthKeys {
        /// Always `auth`.
        field: FieldPath,
        /// Every missing key, in required-set order.
        missing: Vec<&'static str>,
        /// Human-readable message.
        message: String,
    },
}

impl DestinationValidationError {
    pub(crate) fn missing_field(field: FieldPath, message: impl Into<String>) -> Self {
        Self::MissingField {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_enum(
        field: FieldPath,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(field: FieldPath, message: impl Into<String>) -> Self {
        Self::MalformedAuthStructure {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn missing_nested(field: FieldPath, message: impl Into<String>) -> Self {
        Self::MissingNestedField {
            field,
            message: message.into(),
        }
    }

    /// The failure category.
    #[must_use]
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingField { .. } => ValidationErrorKind::MissingField,
            Self::InvalidEnumValue { .. } => ValidationErrorKind::InvalidEnumValue,
            Self::MalformedAuthStructure { .. } => ValidationErrorKind::MalformedAuthStructure,
            Self::MissingNestedField { .. } => ValidationErrorKind::MissingNestedField,
            Self::MissingAuthKeys { .. } => ValidationErrorKind::MissingAuthKeys,
        }
    }

    /// Path of the offending field.
    #[must_use]
    pub const fn field(&self) -> &FieldPath {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidEnumValue { field, .. }
            | Self::MalformedAuthStructure { field, .. }
            | Self::MissingNestedField { field, .. }
            | Self::MissingAuthKeys { field, .. } => field,
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingField { message, .. }
            | Self::InvalidEnumValue { message, .. }
            | Self::MalformedAuthStructure { message, .. }
            | Self::MissingNestedField { message, .. }
            | Self::MissingAuthKeys { message, .. } => message,
        }
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::new("destination", self.kind().as_code())
    }
}

impl From<DestinationValidationError> for ErrorEnvelope {
    fn from(error: DestinationValidationError) -> Self {
        let code = error.error_code();
        let field = error.field().clone();
        let mut envelope =
            Self::expected(code, error.message()).with_metadata(FIELD_METADATA_KEY, field.as_str());

        match error {
            DestinationValidationError::InvalidEnumValue { value, .. } => {
                envelope = envelope.with_metadata("value", redact_if_secret(field.leaf(), &value));
            },
            DestinationValidationError::MissingAuthKeys { missing, .. } => {
                envelope = envelope.with_metadata("missing", missing.join(","));
            },
            DestinationValidationError::MissingField { .. }
            | DestinationValidationError::MalformedAuthStructure { .. }
            | DestinationValidationError::MissingNestedField { .. } => {},
        }

        envelope
    }
}

//! Domain primitives with validated constructors.

use destination_guard_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation failures for domain primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Input is not one of the known cloud tags.
    UnknownCloud {
        /// Raw input that failed to parse.
        input: String,
    },
    /// Input is not one of the known product tags.
    UnknownProduct {
        /// Raw input that failed to parse.
        input: String,
    },
    /// `DestinationId` is empty after trimming.
    InvalidDestinationId {
        /// Length of the raw input before trimming.
        input_length: usize,
    },
}

impl PrimitiveError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownCloud { .. } => ErrorCode::new("domain", "unknown_cloud"),
            Self::UnknownProduct { .. } => ErrorCode::new("domain", "unknown_product"),
            Self::InvalidDestinationId { .. } => {
                ErrorCode::new("domain", "invalid_destination_id")
            },
        }
    }
}

impl fmt::Display for PrimitiveError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCloud { input } => write!(formatter, "Invalid cloud: {input}."),
            Self::UnknownProduct { input } => write!(formatter, "Invalid product: {input}."),
            Self::InvalidDestinationId { .. } => {
                formatter.write_str("DestinationId must be non-empty")
            },
        }
    }
}

impl std::error::Error for PrimitiveError {}

impl From<PrimitiveError> for ErrorEnvelope {
    fn from(error: PrimitiveError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());

        match error {
            PrimitiveError::UnknownCloud { input } | PrimitiveError::UnknownProduct { input } => {
                envelope.with_metadata("input", input)
            },
            PrimitiveError::InvalidDestinationId { input_length } => {
                envelope.with_metadata("input_length", input_length.to_string())
            },
        }
    }
}

/// Identifier of a stored destination record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(Box<str>);

impl DestinationId {
    /// Parse a `DestinationId` from user input.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, PrimitiveError> {
        let raw = input.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PrimitiveError::InvalidDestinationId {
                input_length: raw.len(),
            });
        }

        Ok(Self(trimmed.to_owned().into_boxed_str()))
    }

    /// Access the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the underlying string.
    #[must_use]
    pub fn into_inner(self) -> Box<str> {
        self.0
    }
}

impl AsRef<str> for DestinationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

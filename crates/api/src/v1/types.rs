//! API v1 DTO types.

use destination_guard_domain::DestinationId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Error kind exposed in API v1 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiV1ErrorKind {
    /// The caller's input was rejected (validation, cancellation, not found).
    Rejected,
    /// Invariant violations that indicate a bug.
    Invariant,
    /// Server-side failure (store, I/O).
    Failed,
}

/// API v1 error code string (stable contract value).
pub type ApiV1ErrorCode = String;

/// Metadata map attached to API v1 errors.
pub type ApiV1ErrorMeta = BTreeMap<String, String>;

/// API v1 error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiV1ErrorDto {
    /// Stable error code (e.g. `ERR_DESTINATION_MISSING_FIELD`).
    pub code: ApiV1ErrorCode,
    /// Human-readable message for the caller.
    pub message: String,
    /// Error category.
    pub kind: ApiV1ErrorKind,
    /// Offending payload path (e.g. `auth.accessIdentifiers[0].applicationId`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional metadata for debugging and correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiV1ErrorMeta>,
}

/// API v1 result wrapper for success or failure payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiV1Result<T> {
    /// Success response.
    Ok {
        /// Indicates success.
        ok: bool,
        /// Success payload.
        data: T,
    },
    /// Error response.
    Err {
        /// Indicates failure.
        ok: bool,
        /// Error payload.
        error: ApiV1ErrorDto,
    },
}

impl<T> ApiV1Result<T> {
    /// Build a success response wrapper.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self::Ok { ok: true, data }
    }

    /// Build an error response wrapper.
    #[must_use]
    pub const fn err(error: ApiV1ErrorDto) -> Self {
        Self::Err { ok: false, error }
    }

    /// Returns true for the success variant.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// API v1 destination payload: the stored record with its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiV1DestinationDto {
    /// Store-assigned identifier.
    pub id: String,
    /// Destination fields (`cloud`, `product`, `region`, `auth`, ...).
    pub destination: Map<String, Value>,
}

impl ApiV1DestinationDto {
    /// Build the DTO from a stored id and payload.
    #[must_use]
    pub fn new(id: &DestinationId, destination: Map<String, Value>) -> Self {
        Self {
            id: id.as_str().to_owned(),
            destination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error;

    #[test]
    fn error_dto_omits_absent_optionals() -> Result<(), Box<dyn Error>> {
        let error = ApiV1ErrorDto {
            code: "ERR_DESTINATION_MISSING_FIELD".to_string(),
            message: "Region is required.".to_string(),
            kind: ApiV1ErrorKind::Rejected,
            field: None,
            meta: None,
        };
        assert_eq!(
            serde_json::to_value(&error)?,
            json!({
                "code": "ERR_DESTINATION_MISSING_FIELD",
                "message": "Region is required.",
                "kind": "REJECTED"
            })
        );
        Ok(())
    }

    #[test]
    fn result_wrapper_is_untagged() -> Result<(), Box<dyn Error>> {
        let ok: ApiV1Result<u32> = ApiV1Result::ok(3);
        assert_eq!(serde_json::to_value(&ok)?, json!({ "ok": true, "data": 3 }));

        let parsed: ApiV1Result<u32> = serde_json::from_value(json!({
            "ok": false,
            "error": { "code": "ERR_CORE_INTERNAL", "message": "boom", "kind": "FAILED" }
        }))?;
        assert!(!parsed.is_ok());
        Ok(())
    }
}

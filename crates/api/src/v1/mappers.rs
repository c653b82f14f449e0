//! API v1 DTO mapping helpers.

use crate::v1::{ApiV1ErrorCode, ApiV1ErrorDto, ApiV1ErrorKind, ApiV1ErrorMeta, ApiV1Result};
use destination_guard_shared::{
    ErrorCode, ErrorEnvelope, ErrorKind, FIELD_METADATA_KEY, REDACTED, is_secret_key,
};

/// Convert a shared `ErrorCode` into an API v1 error code string.
#[must_use]
pub fn error_code_to_api_v1(code: &ErrorCode) -> ApiV1ErrorCode {
    let namespace = sanitize_code_segment(code.namespace());
    let detail = sanitize_code_segment(code.code());
    format!("ERR_{namespace}_{detail}")
}

/// Map an `ErrorEnvelope` into an API v1 error DTO.
///
/// The `field` metadata entry is lifted into `ApiV1ErrorDto::field`; secret
/// looking keys in the remaining metadata are redacted.
#[must_use]
pub fn error_envelope_to_api_v1_error(
    envelope: &ErrorEnvelope,
    extra_meta: Option<ApiV1ErrorMeta>,
) -> ApiV1ErrorDto {
    let mut merged: ApiV1ErrorMeta = envelope
        .metadata
        .iter()
        .filter(|(key, _)| key.as_str() != FIELD_METADATA_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if let Some(extra) = extra_meta {
        merged.extend(extra);
    }
    let meta = if merged.is_empty() {
        None
    } else {
        Some(redact_api_v1_meta(merged))
    };

    ApiV1ErrorDto {
        code: error_code_to_api_v1(&envelope.code),
        message: envelope.message.clone(),
        kind: map_error_kind(envelope.kind),
        field: envelope.field().map(str::to_owned),
        meta,
    }
}

/// Map a shared result into an API v1 result wrapper.
#[must_use]
pub fn result_to_api_v1_result<T>(
    result: Result<T, ErrorEnvelope>,
    extra_meta: Option<ApiV1ErrorMeta>,
) -> ApiV1Result<T> {
    match result {
        Ok(data) => ApiV1Result::ok(data),
        Err(error) => ApiV1Result::err(error_envelope_to_api_v1_error(&error, extra_meta)),
    }
}

const fn map_error_kind(kind: ErrorKind) -> ApiV1ErrorKind {
    match kind {
        ErrorKind::Expected => ApiV1ErrorKind::Rejected,
        ErrorKind::Invariant => ApiV1ErrorKind::Invariant,
        ErrorKind::Unexpected => ApiV1ErrorKind::Failed,
    }
}

fn sanitize_code_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn redact_api_v1_meta(meta: ApiV1ErrorMeta) -> ApiV1ErrorMeta {
    meta.into_iter()
        .map(|(key, value)| {
            if is_secret_key(&key) {
                (key, REDACTED.to_string())
            } else {
                (key, value)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use destination_guard_shared::ErrorClass;
    use std::collections::BTreeMap;
    use std::error::Error;

    #[test]
    fn mapping_lifts_field_and_redacts_sensitive_metadata() -> Result<(), Box<dyn Error>> {
        let envelope = ErrorEnvelope::expected(
            ErrorCode::new("destination", "missing_auth_keys"),
            "Missing required keys for ACCESS_KEY: secretAccessKey.",
        )
        .with_metadata("field", "auth")
        .with_metadata("missing", "secretAccessKey")
        .with_metadata("accessKey", "AKIA123");

        let dto = error_envelope_to_api_v1_error(&envelope, None);
        let meta = dto.meta.ok_or("meta should be present")?;
        assert_eq!(dto.code, "ERR_DESTINATION_MISSING_AUTH_KEYS");
        assert_eq!(dto.kind, ApiV1ErrorKind::Rejected);
        assert_eq!(dto.field.as_deref(), Some("auth"));
        assert!(!meta.contains_key("field"));
        assert_eq!(
            meta.get("missing").map(String::as_str),
            Some("secretAccessKey")
        );
        assert_eq!(meta.get("accessKey").map(String::as_str), Some(REDACTED));
        Ok(())
    }

    #[test]
    fn error_kinds_map_to_api_categories() {
        let failed = ErrorEnvelope::unexpected(ErrorCode::io(), "io", ErrorClass::Retriable);
        assert_eq!(
            error_envelope_to_api_v1_error(&failed, None).kind,
            ApiV1ErrorKind::Failed
        );

        let invariant = ErrorEnvelope::invariant(ErrorCode::internal(), "broken");
        assert_eq!(
            error_envelope_to_api_v1_error(&invariant, None).kind,
            ApiV1ErrorKind::Invariant
        );
    }

    #[test]
    fn result_mapping_preserves_ok_and_err() {
        let ok_result: Result<u32, ErrorEnvelope> = Ok(10);
        let mapped = result_to_api_v1_result(ok_result, None);
        assert!(matches!(mapped, ApiV1Result::Ok { ok: true, data: 10 }));

        let mut extra = BTreeMap::new();
        extra.insert("requestId".to_string(), "req_1".to_string());
        let err_result: Result<u32, ErrorEnvelope> = Err(ErrorEnvelope::expected(
            ErrorCode::invalid_input(),
            "bad input",
        ));
        let mapped = result_to_api_v1_result(err_result, Some(extra));
        assert!(matches!(
            mapped,
            ApiV1Result::Err { ok: false, ref error }
                if error.meta.as_ref().and_then(|meta| meta.get("requestId")).is_some()
        ));
    }
}

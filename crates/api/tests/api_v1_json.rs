//! API v1 wire-shape tests.

use destination_guard_api::v1::{
    ApiV1DestinationDto, ApiV1Result, api_v1_destination_schema, api_v1_error_schema,
    error_envelope_to_api_v1_error, result_to_api_v1_result,
};
use destination_guard_domain::DestinationId;
use destination_guard_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use serde_json::{Map, Value, json};
use std::error::Error;

#[test]
fn rejected_destination_matches_wire_shape() -> Result<(), Box<dyn Error>> {
    let envelope = ErrorEnvelope::expected(
        ErrorCode::new("destination", "invalid_enum_value"),
        "Invalid principal type: robot.",
    )
    .with_metadata("field", "auth.accessIdentifiers[0].principalType")
    .with_metadata("value", "robot");

    let dto = error_envelope_to_api_v1_error(&envelope, None);
    assert_eq!(
        serde_json::to_value(&dto)?,
        json!({
            "code": "ERR_DESTINATION_INVALID_ENUM_VALUE",
            "message": "Invalid principal type: robot.",
            "kind": "REJECTED",
            "field": "auth.accessIdentifiers[0].principalType",
            "meta": { "value": "robot" }
        })
    );
    Ok(())
}

#[test]
fn store_failures_surface_as_failed() -> Result<(), Box<dyn Error>> {
    let result: Result<ApiV1DestinationDto, ErrorEnvelope> = Err(ErrorEnvelope::unexpected(
        ErrorCode::io(),
        "store unavailable",
        ErrorClass::Retriable,
    ));
    let mapped = result_to_api_v1_result(result, None);
    assert_eq!(
        serde_json::to_value(&mapped)?,
        json!({
            "ok": false,
            "error": {
                "code": "ERR_CORE_IO",
                "message": "store unavailable",
                "kind": "FAILED"
            }
        })
    );
    Ok(())
}

#[test]
fn destination_dto_round_trips() -> Result<(), Box<dyn Error>> {
    let mut destination = Map::new();
    destination.insert("cloud".to_string(), json!("gcp"));
    destination.insert("product".to_string(), json!("gcs"));
    let id = DestinationId::parse("dst_7")?;

    let ok = ApiV1Result::ok(ApiV1DestinationDto::new(&id, destination));
    let encoded = serde_json::to_value(&ok)?;
    assert_eq!(encoded.pointer("/data/id"), Some(&json!("dst_7")));

    let decoded: ApiV1Result<ApiV1DestinationDto> = serde_json::from_value(encoded)?;
    assert_eq!(decoded, ok);
    Ok(())
}

#[test]
fn schemas_describe_public_dtos() {
    let error_schema = api_v1_error_schema();
    let mut required = error_schema
        .get("required")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();
    required.sort_unstable();
    assert_eq!(required, vec!["code", "kind", "message"]);

    let destination_schema = api_v1_destination_schema();
    assert!(destination_schema.get("properties").is_some());
}

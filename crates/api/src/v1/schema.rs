//! JSON Schema exports for API v1 DTOs.

use crate::v1::{ApiV1DestinationDto, ApiV1ErrorDto};
use schemars::{Schema, schema_for};

/// JSON Schema for `ApiV1ErrorDto`.
#[must_use]
pub fn api_v1_error_schema() -> Schema {
    schema_for!(ApiV1ErrorDto)
}

/// JSON Schema for `ApiV1DestinationDto`.
#[must_use]
pub fn api_v1_destination_schema() -> Schema {
    schema_for!(ApiV1DestinationDto)
}

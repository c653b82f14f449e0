//! JSON Schema export for the runtime config.

use crate::GuardConfig;
use schemars::{Schema, schema_for};

/// JSON Schema describing `GuardConfig` (as accepted by the loaders).
#[must_use]
pub fn guard_config_schema() -> Schema {
    schema_for!(GuardConfig)
}

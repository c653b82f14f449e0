//! JSON truthiness and value rendering.

use serde_json::Value;
use std::num::FpCategory;

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|float| float.classify() != FpCategory::Zero),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Returns true when `value` is present and truthy.
#[must_use]
pub fn is_present_and_truthy(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

/// Render a value for an error message: strings verbatim, everything else as JSON.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

//! The candidate state a validation call inspects.

use destination_guard_domain::{ClosedSet, Cloud, Product};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A destination payload: a JSON object keyed by field name.
pub type Payload = Map<String, Value>;

/// Top-level payload keys.
pub mod keys {
    /// Cloud provider tag.
    pub const CLOUD: &str = "cloud";
    /// Product tag.
    pub const PRODUCT: &str = "product";
    /// Deployment region.
    pub const REGION: &str = "region";
    /// Nested auth object.
    pub const AUTH: &str = "auth";
}

/// Whether every field is mandatory or only supplied fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationMode {
    /// Create/replace: every field is mandatory.
    Full,
    /// Patch: only supplied fields are checked.
    Partial,
}

/// Input under validation.
///
/// In partial mode the draft is the stored record overlaid by the patch:
/// presence is decided by the patch, values are read from the merged view.
#[derive(Debug, Clone)]
pub struct DestinationDraft<'a> {
    mode: ValidationMode,
    supplied: &'a Payload,
    view: Cow<'a, Payload>,
}

impl<'a> DestinationDraft<'a> {
    /// Draft for a create or replace payload.
    #[must_use]
    pub fn full(payload: &'a Payload) -> Self {
        Self {
            mode: ValidationMode::Full,
            supplied: payload,
            view: Cow::Borrowed(payload),
        }
    }

    /// Draft for a patch applied on top of `stored`.
    #[must_use]
    pub fn partial(patch: &'a Payload, stored: &Payload) -> Self {
        Self {
            mode: ValidationMode::Partial,
            supplied: patch,
            view: Cow::Owned(merge(stored, patch)),
        }
    }

    /// Returns true when `key` must be checked in this mode.
    #[must_use]
    pub fn is_checked(&self, key: &str) -> bool {
        match self.mode {
            ValidationMode::Full => true,
            ValidationMode::Partial => self.supplied.contains_key(key),
        }
    }

    /// Value of `key` in the candidate state.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.view.get(key)
    }

    /// The candidate cloud, when it is a known tag.
    #[must_use]
    pub fn cloud(&self) -> Option<Cloud> {
        self.value(keys::CLOUD)
            .and_then(Value::as_str)
            .and_then(Cloud::parse)
    }

    /// The candidate product, when it is a known tag.
    #[must_use]
    pub fn product(&self) -> Option<Product> {
        self.value(keys::PRODUCT)
            .and_then(Value::as_str)
            .and_then(Product::parse)
    }
}

/// Overlay `patch` on `stored`; supplied keys replace stored values wholesale.
#[must_use]
pub fn merge(stored: &Payload, patch: &Payload) -> Payload {
    let mut merged = stored.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

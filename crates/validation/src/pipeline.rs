//! Fail-fast validation entry points.

use crate::auth_schema::check_auth;
use crate::draft::{DestinationDraft, Payload, keys};
use crate::error::DestinationValidationError;
use crate::path::FieldPath;
use crate::presence::check_basic_fields;
use destination_guard_shared::Validated;

/// Validated destination payload proof.
pub type ValidatedPayload = Validated<Payload>;

/// Run every check against `draft`, stopping at the first failure.
pub fn validate(draft: &DestinationDraft<'_>) -> Result<(), DestinationValidationError> {
    check_basic_fields(draft)?;

    if !draft.is_checked(keys::AUTH) {
        return Ok(());
    }
    let Some(auth) = draft.value(keys::AUTH) else {
        return Err(DestinationValidationError::missing_field(
            FieldPath::root(keys::AUTH),
            "Auth is required.",
        ));
    };

    check_auth(draft.cloud(), draft.product(), auth)
}

/// Validate a create or replace payload; every field is mandatory.
pub fn validate_payload(payload: Payload) -> Result<ValidatedPayload, DestinationValidationError> {
    validate(&DestinationDraft::full(&payload))?;
    Ok(Validated::new(payload))
}

/// Validate a patch against the record it will be applied to.
///
/// Only supplied fields are checked, but their values are read from the
/// merged view so cross-field rules see the candidate state. The returned
/// proof wraps the unchanged patch.
pub fn validate_patch(
    patch: Payload,
    stored: &Payload,
) -> Result<ValidatedPayload, DestinationValidationError> {
    validate(&DestinationDraft::partial(&patch, stored))?;
    Ok(Validated::new(patch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationErrorKind;
    use serde_json::{Value, json};

    fn object(value: Value) -> Payload {
        match value {
            Value::Object(fields) => fields,
            _ => Payload::new(),
        }
    }

    #[test]
    fn full_mode_requires_auth() {
        let payload = object(json!({"cloud": "aws", "product": "redshift", "region": "us-east-1"}));
        let error = validate_payload(payload).err();
        assert!(matches!(
            error,
            Some(ref error) if error.kind() == ValidationErrorKind::MissingField
                && error.field().as_str() == "auth"
                && error.message() == "Auth is required."
        ));
    }

    #[test]
    fn valid_payload_is_returned_unchanged() -> Result<(), DestinationValidationError> {
        let payload = object(json!({
            "cloud": "aws",
            "product": "s3",
            "region": "us-east-1",
            "auth": {"type": "ASSUME_ROLE", "arn": "arn:aws:iam::1:role/x"},
            "extra": 1
        }));
        let validated = validate_payload(payload.clone())?;
        assert_eq!(validated.into_inner(), payload);
        Ok(())
    }

    #[test]
    fn patch_without_auth_skips_auth_checks() -> Result<(), DestinationValidationError> {
        let stored = object(json!({"cloud": "aws", "product": "s3", "region": "x", "auth": {}}));
        let patch = object(json!({"region": "eu-west-1"}));
        let validated = validate_patch(patch.clone(), &stored)?;
        assert_eq!(validated.as_ref(), &patch);
        Ok(())
    }

    #[test]
    fn patched_auth_is_checked_against_stored_target() {
        let stored = object(json!({"cloud": "aws", "product": "redshift", "region": "x"}));
        let patch = object(json!({"auth": {"accounts": [{}]}}));
        let error = validate_patch(patch, &stored).err();
        assert!(matches!(
            error,
            Some(ref error) if error.field().as_str() == "auth.accounts[0].accountId"
        ));
    }

    #[test]
    fn patched_null_auth_is_malformed() {
        let stored = object(json!({"cloud": "gcp", "product": "gcs", "region": "x"}));
        let patch = object(json!({"auth": null}));
        let error = validate_patch(patch, &stored).err();
        assert!(matches!(
            error,
            Some(ref error) if error.kind() == ValidationErrorKind::MalformedAuthStructure
        ));
    }
}

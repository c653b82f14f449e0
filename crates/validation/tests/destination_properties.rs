//! End-to-end properties of destination payload validation.

use destination_guard_domain::{ClosedSet, Cloud, Product, is_supported, products_for};
use destination_guard_shared::{ErrorEnvelope, ErrorKind};
use destination_guard_validation::{
    DestinationValidationError, Payload, ValidationErrorKind, validate_patch, validate_payload,
};
use proptest::prelude::*;
use serde_json::{Value, json};
use std::error::Error;

fn object(value: Value) -> Payload {
    match value {
        Value::Object(fields) => fields,
        _ => Payload::new(),
    }
}

/// A minimal auth object that satisfies the schema for (cloud, product).
fn valid_auth(cloud: Cloud, product: Product) -> Value {
    match (cloud, product) {
        (Cloud::Aws, Product::S3) => {
            json!({"type": "ACCESS_KEY", "accessKey": "k", "secretAccessKey": "s"})
        },
        (Cloud::Gcp, Product::Gcs) => json!({"type": "EXTERNAL_ACCESS"}),
        (_, Product::BlobStorage) => {
            json!({"accessIdentifiers": {"consumerManagedApplications": [{"applicationId": "app"}]}})
        },
        (_, Product::BigQuery) => {
            json!({"accessIdentifiers": [{"grantedEmail": "a@b.c", "principalType": "user"}]})
        },
        (_, Product::Snowflake) => {
            json!({"accessIdentifiers": [{"organizationName": "org", "accountName": "acct"}]})
        },
        (_, Product::Databricks) => json!({"accessIdentifiers": [{"metastoreId": "m-1"}]}),
        (_, Product::Redshift) => json!({"accounts": [{"accountId": "123456789012"}]}),
        (_, Product::Sftp) => {
            json!({"accessIdentifiers": [{"label": "ops", "publicKey": "ssh-ed25519 AAAA"}]})
        },
        (_, Product::S3 | Product::Gcs) => json!({}),
    }
}

fn supported_pair() -> impl Strategy<Value = (Cloud, Product)> {
    prop::sample::select(Cloud::ALL).prop_flat_map(|cloud| {
        prop::sample::select(products_for(cloud)).prop_map(move |product| (cloud, product))
    })
}

fn unsupported_pair() -> impl Strategy<Value = (Cloud, Product)> {
    (prop::sample::select(Cloud::ALL), prop::sample::select(Product::ALL))
        .prop_filter("pair must be unsupported", |(cloud, product)| {
            !is_supported(*cloud, *product)
        })
}

fn kind_and_field(error: &DestinationValidationError) -> (ValidationErrorKind, String) {
    (error.kind(), error.field().to_string())
}

proptest! {
    #[test]
    fn unsupported_products_are_rejected((cloud, product) in unsupported_pair()) {
        let payload = object(json!({
            "cloud": cloud.as_str(),
            "product": product.as_str(),
            "region": "x",
            "auth": {}
        }));
        let error = validate_payload(payload).err();
        prop_assert_eq!(
            error.as_ref().map(kind_and_field),
            Some((ValidationErrorKind::InvalidEnumValue, "product".to_owned()))
        );
    }

    #[test]
    fn supported_pairs_accept_their_minimal_auth((cloud, product) in supported_pair()) {
        let payload = object(json!({
            "cloud": cloud.as_str(),
            "product": product.as_str(),
            "region": "us-east-1",
            "auth": valid_auth(cloud, product)
        }));
        prop_assert!(validate_payload(payload).is_ok());
    }

    #[test]
    fn full_mode_requires_region((cloud, product) in supported_pair()) {
        let payload = object(json!({
            "cloud": cloud.as_str(),
            "product": product.as_str(),
            "auth": valid_auth(cloud, product)
        }));
        let error = validate_payload(payload.clone()).err();
        prop_assert_eq!(
            error.as_ref().map(kind_and_field),
            Some((ValidationErrorKind::MissingField, "region".to_owned()))
        );

        let stored = object(json!({"cloud": cloud.as_str(), "product": product.as_str()}));
        prop_assert!(validate_patch(payload, &stored).is_ok());
    }

    #[test]
    fn validation_is_idempotent(
        (cloud, product) in supported_pair(),
        region in prop::option::of("[a-z]{0,3}-[a-z]{0,5}-[0-9]"),
        drop_auth in any::<bool>(),
    ) {
        let mut payload = object(json!({
            "cloud": cloud.as_str(),
            "product": product.as_str(),
            "auth": valid_auth(cloud, product)
        }));
        if let Some(region) = region {
            payload.insert("region".to_owned(), Value::String(region));
        }
        if drop_auth {
            payload.remove("auth");
        }

        let first = validate_payload(payload.clone());
        let second = validate_payload(payload);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn partial_mode_never_reports_absent_fields(
        (cloud, product) in supported_pair(),
        region in "[a-z]{2}-[a-z]{4,8}-[1-3]",
    ) {
        let stored = object(json!({"cloud": cloud.as_str(), "product": product.as_str()}));
        let patch = object(json!({"region": region}));
        prop_assert!(validate_patch(patch, &stored).is_ok());
    }
}

#[test]
fn access_key_reports_only_the_missing_secret() {
    let payload = object(json!({
        "cloud": "aws",
        "product": "s3",
        "region": "us-east-1",
        "auth": {"type": "ACCESS_KEY", "accessKey": "k"}
    }));
    let error = validate_payload(payload).err();
    assert!(matches!(
        error,
        Some(DestinationValidationError::MissingAuthKeys { ref missing, .. })
            if missing == &["secretAccessKey"]
    ));
}

#[test]
fn access_key_reports_both_keys_when_neither_is_supplied() {
    let payload = object(json!({
        "cloud": "aws",
        "product": "s3",
        "region": "us-east-1",
        "auth": {"type": "ACCESS_KEY"}
    }));
    let error = validate_payload(payload).err();
    assert!(matches!(
        error,
        Some(DestinationValidationError::MissingAuthKeys { ref missing, ref message, .. })
            if missing == &["accessKey", "secretAccessKey"]
            && message == "Missing required keys for aws s3 auth type 'ACCESS_KEY': accessKey, secretAccessKey"
    ));
}

#[test]
fn complete_access_key_auth_passes() {
    let payload = object(json!({
        "cloud": "aws",
        "product": "s3",
        "region": "us-east-1",
        "auth": {"type": "ACCESS_KEY", "accessKey": "k", "secretAccessKey": "s"}
    }));
    assert!(validate_payload(payload).is_ok());
}

#[test]
fn azure_application_without_id_is_a_missing_nested_field() {
    let payload = object(json!({
        "cloud": "azure",
        "product": "blobStorage",
        "region": "westeurope",
        "auth": {"accessIdentifiers": {"consumerManagedApplications": [{}]}}
    }));
    let error = validate_payload(payload).err();
    assert_eq!(
        error.as_ref().map(kind_and_field),
        Some((
            ValidationErrorKind::MissingNestedField,
            "auth.accessIdentifiers.consumerManagedApplications[0].applicationId".to_owned()
        ))
    );
}

#[test]
fn bigquery_robot_principal_is_an_invalid_enum_value() {
    let payload = object(json!({
        "cloud": "gcp",
        "product": "bigquery",
        "region": "eu",
        "auth": {"accessIdentifiers": [{"grantedEmail": "a@b.c", "principalType": "robot"}]}
    }));
    let error = validate_payload(payload).err();
    assert_eq!(
        error.as_ref().map(kind_and_field),
        Some((
            ValidationErrorKind::InvalidEnumValue,
            "auth.accessIdentifiers[0].principalType".to_owned()
        ))
    );
}

#[test]
fn supplied_auth_is_checked_in_full_during_a_patch() {
    let stored = object(json!({
        "cloud": "aws",
        "product": "s3",
        "region": "us-east-1",
        "auth": {"type": "ASSUME_ROLE", "arn": "arn:aws:iam::1:role/x"}
    }));
    let patch = object(json!({"auth": {"type": "CONSUMER_ROLE", "arn": "arn"}}));
    let error = validate_patch(patch, &stored).err();
    assert!(matches!(
        error,
        Some(DestinationValidationError::MissingAuthKeys { ref missing, .. })
            if missing == &["consumerArn"]
    ));
}

#[test]
fn patch_switching_cloud_rechecks_the_stored_product() {
    let stored = object(json!({
        "cloud": "aws",
        "product": "redshift",
        "region": "us-east-1",
        "auth": {"accounts": [{"accountId": "1"}]}
    }));
    let patch = object(json!({"cloud": "gcp", "product": "redshift"}));
    let error = validate_patch(patch, &stored).err();
    assert!(matches!(
        error,
        Some(ref error) if error.kind() == ValidationErrorKind::InvalidEnumValue
            && error.message() == "Product 'redshift' is not valid for cloud 'gcp'."
    ));
}

#[test]
fn validation_errors_become_expected_envelopes() -> Result<(), Box<dyn Error>> {
    let payload = object(json!({"cloud": "aws", "product": "s3", "region": "x", "auth": {}}));
    let Err(error) = validate_payload(payload) else {
        return Err("auth without a type must be rejected".into());
    };
    let envelope: ErrorEnvelope = error.into();
    assert_eq!(envelope.kind, ErrorKind::Expected);
    assert_eq!(envelope.code.namespace(), "destination");
    assert_eq!(envelope.code.code(), "missing_field");
    assert_eq!(envelope.field(), Some("auth.type"));
    Ok(())
}

#[test]
fn schema_rows_reject_incomplete_auth() {
    let cases = [
        (
            "aws",
            "snowflake",
            json!({"accessIdentifiers": [{"organizationName": "org"}]}),
            ValidationErrorKind::MissingNestedField,
            "auth.accessIdentifiers[0].accountName",
            "accountName is required.",
        ),
        (
            "gcp",
            "databricks",
            json!({"accessIdentifiers": [{"metastoreId": "m-1"}, {"metastoreId": ""}]}),
            ValidationErrorKind::MissingNestedField,
            "auth.accessIdentifiers[1].metastoreId",
            "metastoreId is required.",
        ),
        (
            "aws",
            "sftp",
            json!({"accessIdentifiers": [{"label": "ops"}]}),
            ValidationErrorKind::MissingNestedField,
            "auth.accessIdentifiers[0].publicKey",
            "publicKey is required.",
        ),
        (
            "gcp",
            "gcs",
            json!({"serviceAccountToImpersonate": "sa@example.iam"}),
            ValidationErrorKind::MissingField,
            "auth.type",
            "Auth 'type' is required for GCP GCS.",
        ),
        (
            "gcp",
            "gcs",
            json!({"type": "ACCESS_KEY"}),
            ValidationErrorKind::InvalidEnumValue,
            "auth.type",
            "Invalid auth type 'ACCESS_KEY' for GCP GCS. Supported auth types are EXTERNAL_ACCESS, IMPERSONATION.",
        ),
    ];

    for (cloud, product, auth, kind, field, message) in cases {
        let payload = object(json!({
            "cloud": cloud,
            "product": product,
            "region": "us-east-1",
            "auth": auth
        }));
        let error = validate_payload(payload).err();
        assert_eq!(
            error.as_ref().map(kind_and_field),
            Some((kind, field.to_owned())),
            "{cloud}/{product}"
        );
        assert_eq!(
            error.map(|error| error.to_string()).as_deref(),
            Some(message),
            "{cloud}/{product}"
        );
    }
}

//! Schema selection and structural checks for the nested `auth` object.

use crate::collections::{
    AZURE_APPLICATIONS, BIGQUERY_IDENTIFIERS, CollectionRule, DATABRICKS_IDENTIFIERS,
    REDSHIFT_ACCOUNTS, SFTP_IDENTIFIERS, SNOWFLAKE_IDENTIFIERS,
};
use crate::draft::keys;
use crate::error::DestinationValidationError;
use crate::path::FieldPath;
use crate::value::{is_present_and_truthy, render};
use destination_guard_domain::{ClosedSet, Cloud, GcsAuthType, Product, S3AuthType};
use serde_json::{Map, Value};

const AUTH_TYPE: &str = "type";
const ACCESS_IDENTIFIERS: &str = "accessIdentifiers";

/// The structural schema `auth` must satisfy for one (cloud, product) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSchema {
    /// aws/s3, discriminated by `auth.type` (`S3AuthType`).
    AwsS3,
    /// gcp/gcs, discriminated by `auth.type` (`GcsAuthType`).
    GcpGcs,
    /// azure/blobStorage: applications nested under `auth.accessIdentifiers`.
    AzureBlobStorage,
    /// gcp/bigquery: granted principals.
    GcpBigQuery,
    /// snowflake on any cloud: consumer accounts.
    Snowflake,
    /// databricks on any cloud: recipient metastores.
    Databricks,
    /// aws/redshift: consumer AWS accounts.
    AwsRedshift,
    /// aws/sftp: SSH keys.
    AwsSftp,
}

impl AuthSchema {
    /// Select the schema for a (cloud, product) pair; unsupported pairs have none.
    #[must_use]
    pub const fn for_target(cloud: Cloud, product: Product) -> Option<Self> {
        match product {
            Product::S3 => match cloud {
                Cloud::Aws => Some(Self::AwsS3),
                Cloud::Gcp | Cloud::Azure => None,
            },
            Product::Gcs => match cloud {
                Cloud::Gcp => Some(Self::GcpGcs),
                Cloud::Aws | Cloud::Azure => None,
            },
            Product::BlobStorage => match cloud {
                Cloud::Azure => Some(Self::AzureBlobStorage),
                Cloud::Aws | Cloud::Gcp => None,
            },
            Product::BigQuery => match cloud {
                Cloud::Gcp => Some(Self::GcpBigQuery),
                Cloud::Aws | Cloud::Azure => None,
            },
            Product::Snowflake => match cloud {
                Cloud::Aws | Cloud::Gcp | Cloud::Azure => Some(Self::Snowflake),
            },
            Product::Databricks => match cloud {
                Cloud::Aws | Cloud::Gcp | Cloud::Azure => Some(Self::Databricks),
            },
            Product::Redshift => match cloud {
                Cloud::Aws => Some(Self::AwsRedshift),
                Cloud::Gcp | Cloud::Azure => None,
            },
            Product::Sftp => match cloud {
                Cloud::Aws => Some(Self::AwsSftp),
                Cloud::Gcp | Cloud::Azure => None,
            },
        }
    }

    /// The list rule applied by collection-based schemas.
    #[must_use]
    pub const fn collection(self) -> Option<&'static CollectionRule> {
        match self {
            Self::AwsS3 | Self::GcpGcs => None,
            Self::AzureBlobStorage => Some(&AZURE_APPLICATIONS),
            Self::GcpBigQuery => Some(&BIGQUERY_IDENTIFIERS),
            Self::Snowflake => Some(&SNOWFLAKE_IDENTIFIERS),
            Self::Databricks => Some(&DATABRICKS_IDENTIFIERS),
            Self::AwsRedshift => Some(&REDSHIFT_ACCOUNTS),
            Self::AwsSftp => Some(&SFTP_IDENTIFIERS),
        }
    }
}

/// Check `auth` against the schema selected by `cloud` and `product`.
///
/// `auth` must be an object. When the pair has no schema (an unrecognized
/// cloud or product reached through a patch) nothing else is checked.
pub fn check_auth(
    cloud: Option<Cloud>,
    product: Option<Product>,
    auth: &Value,
) -> Result<(), DestinationValidationError> {
    let auth_path = FieldPath::root(keys::AUTH);
    let Value::Object(fields) = auth else {
        return Err(DestinationValidationError::malformed(
            auth_path,
            "Auth must be a JSON object.",
        ));
    };

    let Some((cloud, product)) = cloud.zip(product) else {
        return Ok(());
    };
    let Some(schema) = AuthSchema::for_target(cloud, product) else {
        return Ok(());
    };

    match schema {
        AuthSchema::AwsS3 => {
            let auth_type: S3AuthType = discriminate(fields, "AWS S3")?;
            require_keys(fields, cloud, product, auth_type.as_str(), auth_type.required_keys())
        },
        AuthSchema::GcpGcs => {
            let auth_type: GcsAuthType = discriminate(fields, "GCP GCS")?;
            require_keys(fields, cloud, product, auth_type.as_str(), auth_type.required_keys())
        },
        AuthSchema::AzureBlobStorage => {
            let identifiers_path = auth_path.key(ACCESS_IDENTIFIERS);
            let identifiers = fields.get(ACCESS_IDENTIFIERS);
            let message =
                "accessIdentifiers is required for Azure Blob Storage and must be a JSON object.";
            if !is_present_and_truthy(identifiers) {
                return Err(DestinationValidationError::missing_nested(
                    identifiers_path,
                    message,
                ));
            }
            let Some(Value::Object(identifiers)) = identifiers else {
                return Err(DestinationValidationError::malformed(
                    identifiers_path,
                    message,
                ));
            };
            AZURE_APPLICATIONS.check(identifiers, &identifiers_path)
        },
        AuthSchema::GcpBigQuery
        | AuthSchema::Snowflake
        | AuthSchema::Databricks
        | AuthSchema::AwsRedshift
        | AuthSchema::AwsSftp => match schema.collection() {
            Some(rule) => rule.check(fields, &auth_path),
            None => Ok(()),
        },
    }
}

fn discriminate<T: ClosedSet>(
    fields: &Map<String, Value>,
    label: &str,
) -> Result<T, DestinationValidationError> {
    let path = FieldPath::root(keys::AUTH).key(AUTH_TYPE);
    let value = fields.get(AUTH_TYPE);
    if !is_present_and_truthy(value) {
        return Err(DestinationValidationError::missing_field(
            path,
            format!("Auth 'type' is required for {label}."),
        ));
    }

    if let Some(parsed) = value.and_then(Value::as_str).and_then(T::parse) {
        return Ok(parsed);
    }

    let rendered = value.map_or_else(String::new, render);
    Err(DestinationValidationError::invalid_enum(
        path,
        rendered.clone(),
        format!(
            "Invalid auth type '{rendered}' for {label}. Supported auth types are {}.",
            T::joined(", ")
        ),
    ))
}

fn require_keys(
    fields: &Map<String, Value>,
    cloud: Cloud,
    product: Product,
    auth_type: &str,
    required: &'static [&'static str],
) -> Result<(), DestinationValidationError> {
    let missing: Vec<&'static str> = required
        .iter()
        .copied()
        .filter(|key| !fields.contains_key(*key))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }

    let message = format!(
        "Missing required keys for {cloud} {product} auth type '{auth_type}': {}",
        missing.join(", ")
    );
    Err(DestinationValidationError::MissingAuthKeys {
        field: FieldPath::root(keys::AUTH),
        missing,
        message,
    })
}

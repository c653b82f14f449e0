//! Auth discriminators and the closed enums used inside `auth` payloads.

use crate::vocabulary::ClosedSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `auth.type` discriminator for AWS S3 destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum S3AuthType {
    /// The service assumes a role in the customer account.
    AssumeRole,
    /// The customer grants a role to a consumer principal.
    ConsumerRole,
    /// Static access key pair.
    AccessKey,
}

impl S3AuthType {
    /// Keys that must be present in `auth` for this type.
    #[must_use]
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::AssumeRole => &["arn"],
            Self::ConsumerRole => &["arn", "consumerArn"],
            Self::AccessKey => &["accessKey", "secretAccessKey"],
        }
    }
}

impl ClosedSet for S3AuthType {
    const ALL: &'static [Self] = &[Self::AssumeRole, Self::ConsumerRole, Self::AccessKey];

    fn as_str(self) -> &'static str {
        match self {
            Self::AssumeRole => "ASSUME_ROLE",
            Self::ConsumerRole => "CONSUMER_ROLE",
            Self::AccessKey => "ACCESS_KEY",
        }
    }
}

impl fmt::Display for S3AuthType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The `auth.type` discriminator for GCP GCS destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GcsAuthType {
    /// Bucket access is granted externally; nothing else to supply.
    ExternalAccess,
    /// The service impersonates a customer service account.
    Impersonation,
}

impl GcsAuthType {
    /// Keys that must be present in `auth` for this type.
    #[must_use]
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::ExternalAccess => &[],
            Self::Impersonation => &["serviceAccountToImpersonate"],
        }
    }
}

impl ClosedSet for GcsAuthType {
    const ALL: &'static [Self] = &[Self::ExternalAccess, Self::Impersonation];

    fn as_str(self) -> &'static str {
        match self {
            Self::ExternalAccess => "EXTERNAL_ACCESS",
            Self::Impersonation => "IMPERSONATION",
        }
    }
}

impl fmt::Display for GcsAuthType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Principal kinds accepted by `BigQuery` access identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrincipalType {
    /// A single Google account.
    User,
    /// A Google group.
    Group,
    /// A service account.
    ServiceAccount,
}

impl ClosedSet for PrincipalType {
    const ALL: &'static [Self] = &[Self::User, Self::Group, Self::ServiceAccount];

    fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::ServiceAccount => "serviceAccount",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

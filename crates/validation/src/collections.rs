//! Static element rules for the nested collections inside `auth`.

use crate::error::DestinationValidationError;
use crate::path::FieldPath;
use crate::value::{is_present_and_truthy, is_truthy, render};
use destination_guard_domain::{ClosedSet, PrincipalType};
use serde_json::{Map, Value};

/// A closed vocabulary an element key must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// `user`, `group`, `serviceAccount`.
    PrincipalType,
}

impl Vocabulary {
    fn contains(self, tag: &str) -> bool {
        match self {
            Self::PrincipalType => PrincipalType::parse(tag).is_some(),
        }
    }

    fn allowed(self) -> String {
        match self {
            Self::PrincipalType => PrincipalType::joined(", "),
        }
    }
}

/// A requirement every collection element must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRule {
    /// The key must hold a truthy value.
    NonEmpty {
        /// Element key.
        key: &'static str,
        /// Message reported when the rule fails.
        message: &'static str,
    },
    /// The key must exist; its value is not inspected.
    Present {
        /// Element key.
        key: &'static str,
        /// Message reported when the rule fails.
        message: &'static str,
    },
    /// The key must hold a tag from a closed vocabulary.
    OneOf {
        /// Element key.
        key: &'static str,
        /// Accepted tags.
        vocabulary: Vocabulary,
    },
}

impl ElementRule {
    fn check(
        self,
        element: &Map<String, Value>,
        element_path: &FieldPath,
    ) -> Result<(), DestinationValidationError> {
        match self {
            Self::NonEmpty { key, message } => {
                if is_present_and_truthy(element.get(key)) {
                    return Ok(());
                }
                Err(DestinationValidationError::missing_nested(
                    element_path.key(key),
                    message,
                ))
            },
            Self::Present { key, message } => {
                if element.contains_key(key) {
                    return Ok(());
                }
                Err(DestinationValidationError::missing_nested(
                    element_path.key(key),
                    message,
                ))
            },
            Self::OneOf { key, vocabulary } => {
                let Some(value) = element.get(key).filter(|value| is_truthy(value)) else {
                    return Err(DestinationValidationError::missing_nested(
                        element_path.key(key),
                        format!("{key} is required."),
                    ));
                };
                if value.as_str().is_some_and(|tag| vocabulary.contains(tag)) {
                    return Ok(());
                }
                let rendered = render(value);
                Err(DestinationValidationError::invalid_enum(
                    element_path.key(key),
                    rendered.clone(),
                    format!("Invalid {key} '{rendered}'. Allowed: {}", vocabulary.allowed()),
                ))
            },
        }
    }
}

/// A non-empty list of objects stored under `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRule {
    /// Key holding the list.
    pub key: &'static str,
    /// Message when the list is absent, empty or not a list.
    pub required_message: &'static str,
    /// Message when an element is not an object.
    pub element_message: &'static str,
    /// Requirements applied to every element, in order.
    pub elements: &'static [ElementRule],
}

impl CollectionRule {
    /// Check the list stored under `self.key` in `container`.
    ///
    /// Elements are checked in order; the first failing element stops the scan.
    pub fn check(
        &self,
        container: &Map<String, Value>,
        container_path: &FieldPath,
    ) -> Result<(), DestinationValidationError> {
        let path = container_path.key(self.key);
        let value = container.get(self.key);

        if !is_present_and_truthy(value) {
            return Err(DestinationValidationError::missing_nested(
                path,
                self.required_message,
            ));
        }
        let Some(Value::Array(items)) = value else {
            return Err(DestinationValidationError::malformed(
                path,
                self.required_message,
            ));
        };

        for (index, item) in items.iter().enumerate() {
            let element_path = path.index(index);
            let Value::Object(element) = item else {
                return Err(DestinationValidationError::malformed(
                    element_path,
                    self.element_message,
                ));
            };
            for rule in self.elements {
                rule.check(element, &element_path)?;
            }
        }

        Ok(())
    }
}

const ACCESS_IDENTIFIER_NOT_OBJECT: &str = "Each accessIdentifier must be an object.";

/// `auth.accessIdentifiers.consumerManagedApplications` for Azure Blob Storage.
pub const AZURE_APPLICATIONS: CollectionRule = CollectionRule {
    key: "consumerManagedApplications",
    required_message: "At least one application is required in consumerManagedApplications.",
    element_message: "Each application must contain 'applicationId'.",
    elements: &[ElementRule::Present {
        key: "applicationId",
        message: "Each application must contain 'applicationId'.",
    }],
};

/// `auth.accessIdentifiers` for GCP `BigQuery`.
pub const BIGQUERY_IDENTIFIERS: CollectionRule = CollectionRule {
    key: "accessIdentifiers",
    required_message: "accessIdentifiers is required for GCP BigQuery and must be a non-empty array of objects.",
    element_message: ACCESS_IDENTIFIER_NOT_OBJECT,
    elements: &[
        ElementRule::NonEmpty {
            key: "grantedEmail",
            message: "grantedEmail is required.",
        },
        ElementRule::OneOf {
            key: "principalType",
            vocabulary: Vocabulary::PrincipalType,
        },
    ],
};

/// `auth.accessIdentifiers` for Snowflake shares.
pub const SNOWFLAKE_IDENTIFIERS: CollectionRule = CollectionRule {
    key: "accessIdentifiers",
    required_message: "accessIdentifiers is required for Snowflake and must be a non-empty array of objects.",
    element_message: ACCESS_IDENTIFIER_NOT_OBJECT,
    elements: &[
        ElementRule::NonEmpty {
            key: "organizationName",
            message: "organizationName is required.",
        },
        ElementRule::NonEmpty {
            key: "accountName",
            message: "accountName is required.",
        },
    ],
};

/// `auth.accessIdentifiers` for Databricks shares.
pub const DATABRICKS_IDENTIFIERS: CollectionRule = CollectionRule {
    key: "accessIdentifiers",
    required_message: "accessIdentifiers is required for Databricks and must be a non-empty array of objects.",
    element_message: ACCESS_IDENTIFIER_NOT_OBJECT,
    elements: &[ElementRule::NonEmpty {
        key: "metastoreId",
        message: "metastoreId is required.",
    }],
};

/// `auth.accounts` for Amazon Redshift.
pub const REDSHIFT_ACCOUNTS: CollectionRule = CollectionRule {
    key: "accounts",
    required_message: "accounts is required for Redshift and must be a non-empty array of objects.",
    element_message: "Each account must be an object.",
    elements: &[ElementRule::NonEmpty {
        key: "accountId",
        message: "accountId is required and must be a non-empty string.",
    }],
};

/// `auth.accessIdentifiers` for SFTP on AWS.
pub const SFTP_IDENTIFIERS: CollectionRule = CollectionRule {
    key: "accessIdentifiers",
    required_message: "accessIdentifiers is required for SFTP and must be a non-empty array of objects.",
    element_message: ACCESS_IDENTIFIER_NOT_OBJECT,
    elements: &[
        ElementRule::NonEmpty {
            key: "label",
            message: "label is required.",
        },
        ElementRule::NonEmpty {
            key: "publicKey",
            message: "publicKey is required.",
        },
    ],
};

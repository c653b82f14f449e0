//! # destination-guard-validation
//!
//! Validation engine for destination payloads.
//!
//! A payload is checked in a fixed order and the first failure wins:
//!
//! 1. `cloud`, `product` and `region` presence, plus product-for-cloud legality
//! 2. the `auth` object against the schema selected by (cloud, product) and,
//!    for aws/s3 and gcp/gcs, by `auth.type`
//!
//! Full mode (create/replace) treats every field as mandatory. Partial mode
//! (patch) only checks supplied fields, reading their values from the stored
//! record overlaid by the patch.
//!
//! Rule tables are constants; validation is pure and thread-safe.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod auth_schema;
pub mod collections;
pub mod draft;
pub mod error;
pub mod path;
pub mod pipeline;
pub mod presence;
pub mod value;

pub use auth_schema::{AuthSchema, check_auth};
pub use collections::{CollectionRule, ElementRule, Vocabulary};
pub use draft::{DestinationDraft, Payload, keys, merge};
pub use error::{DestinationValidationError, ValidationErrorKind};
pub use path::FieldPath;
pub use pipeline::{ValidatedPayload, validate, validate_patch, validate_payload};
pub use presence::check_basic_fields;
pub use value::is_truthy;

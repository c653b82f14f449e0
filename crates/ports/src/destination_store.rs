//! Destination persistence boundary contract.

use crate::BoxFuture;
use destination_guard_domain::DestinationId;
use destination_guard_shared::{RequestContext, Result, Validated};
use serde_json::{Map, Value};

/// A destination payload as stored: a JSON object keyed by field name.
pub type DestinationPayload = Map<String, Value>;

/// A stored destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRecord {
    /// Store-assigned identifier.
    pub id: DestinationId,
    /// The validated payload.
    pub payload: DestinationPayload,
}

/// Boundary contract for destination persistence.
///
/// Writes only accept `Validated` payloads; the store never re-validates.
pub trait DestinationStorePort: Send + Sync {
    /// Persist a new destination and return it with its assigned id.
    fn insert(
        &self,
        ctx: &RequestContext,
        payload: Validated<DestinationPayload>,
    ) -> BoxFuture<'_, Result<DestinationRecord>>;

    /// Load a destination; `None` when the id is unknown.
    fn get(
        &self,
        ctx: &RequestContext,
        id: DestinationId,
    ) -> BoxFuture<'_, Result<Option<DestinationRecord>>>;

    /// Overwrite a destination; `None` when the id is unknown.
    fn replace(
        &self,
        ctx: &RequestContext,
        id: DestinationId,
        payload: Validated<DestinationPayload>,
    ) -> BoxFuture<'_, Result<Option<DestinationRecord>>>;
}

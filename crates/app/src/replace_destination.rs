//! Replace a stored destination with a new full payload.

use crate::deps::DestinationDeps;
use crate::observe::{self, Operation};
use destination_guard_domain::DestinationId;
use destination_guard_ports::{DestinationPayload, DestinationRecord};
use destination_guard_shared::{RequestContext, Result};
use destination_guard_validation::validate_payload;

/// Validate `payload` in full mode and overwrite the record `id`.
///
/// An unknown id yields `destination:not_found`.
#[tracing::instrument(
    name = "destination.replace",
    skip_all,
    fields(correlation_id = %ctx.correlation_id(), destination_id = %id)
)]
pub async fn replace_destination(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    id: DestinationId,
    payload: DestinationPayload,
) -> Result<DestinationRecord> {
    let validated = validate_payload(payload)
        .map_err(|error| observe::rejected(ctx, deps, Operation::Replace, Some(&id), error))?;

    ctx.ensure_not_cancelled("replace_destination.replace")?;
    let replaced = deps
        .store
        .replace(ctx, id.clone(), validated)
        .await
        .map_err(|error| observe::store_failed(ctx, deps, Operation::Replace, Some(&id), error))?;
    let Some(record) = replaced else {
        return Err(observe::not_found(&id));
    };

    observe::succeeded(ctx, deps, Operation::Replace, &record.id);
    Ok(record)
}

//! Create a destination from a full payload.

use crate::deps::DestinationDeps;
use crate::observe::{self, Operation};
use destination_guard_ports::{DestinationPayload, DestinationRecord};
use destination_guard_shared::{RequestContext, Result};
use destination_guard_validation::validate_payload;

/// Validate `payload` in full mode and insert it.
///
/// Validation failures come back as expected envelopes in the `destination`
/// namespace; store failures are returned untouched.
#[tracing::instrument(
    name = "destination.create",
    skip_all,
    fields(correlation_id = %ctx.correlation_id())
)]
pub async fn create_destination(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    payload: DestinationPayload,
) -> Result<DestinationRecord> {
    let validated = validate_payload(payload)
        .map_err(|error| observe::rejected(ctx, deps, Operation::Create, None, error))?;

    ctx.ensure_not_cancelled("create_destination.insert")?;
    let record = deps
        .store
        .insert(ctx, validated)
        .await
        .map_err(|error| observe::store_failed(ctx, deps, Operation::Create, None, error))?;

    observe::succeeded(ctx, deps, Operation::Create, &record.id);
    Ok(record)
}

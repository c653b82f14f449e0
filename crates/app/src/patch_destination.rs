//! Apply a partial update to a stored destination.

use crate::deps::DestinationDeps;
use crate::observe::{self, Operation};
use destination_guard_domain::DestinationId;
use destination_guard_ports::{DestinationPayload, DestinationRecord};
use destination_guard_shared::{RequestContext, Result};
use destination_guard_validation::{merge, validate_patch};

/// Validate `patch` against the stored record and persist the merged result.
///
/// Only the supplied fields are checked, but cross-field rules (product for
/// cloud, auth schema selection) read the stored record overlaid by the
/// patch. A supplied `auth` replaces the stored one and is checked in full.
///
/// The merged record is not re-validated as a whole: fields the patch leaves
/// out are persisted as stored. A patch of only `cloud` can therefore leave a
/// stored `product` or `auth` that no longer fits the new cloud.
#[tracing::instrument(
    name = "destination.patch",
    skip_all,
    fields(correlation_id = %ctx.correlation_id(), destination_id = %id)
)]
pub async fn patch_destination(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    id: DestinationId,
    patch: DestinationPayload,
) -> Result<DestinationRecord> {
    let stored = deps
        .store
        .get(ctx, id.clone())
        .await
        .map_err(|error| observe::store_failed(ctx, deps, Operation::Patch, Some(&id), error))?;
    let Some(stored) = stored else {
        return Err(observe::not_found(&id));
    };

    let validated = validate_patch(patch, &stored.payload)
        .map_err(|error| observe::rejected(ctx, deps, Operation::Patch, Some(&id), error))?;
    let merged = validated.map(|patch| merge(&stored.payload, &patch));

    ctx.ensure_not_cancelled("patch_destination.replace")?;
    let replaced = deps
        .store
        .replace(ctx, id.clone(), merged)
        .await
        .map_err(|error| observe::store_failed(ctx, deps, Operation::Patch, Some(&id), error))?;
    let Some(record) = replaced else {
        return Err(observe::not_found(&id));
    };

    observe::succeeded(ctx, deps, Operation::Patch, &record.id);
    Ok(record)
}

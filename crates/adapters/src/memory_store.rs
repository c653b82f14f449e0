//! In-memory destination store.

use destination_guard_domain::DestinationId;
use destination_guard_ports::{
    BoxFuture, DestinationPayload, DestinationRecord, DestinationStorePort,
};
use destination_guard_shared::{ErrorClass, ErrorCode, ErrorEnvelope, RequestContext, Result, Validated};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Destination store backed by an ordered map.
///
/// Ids are assigned sequentially as `dst_<n>`.
#[derive(Debug, Default)]
pub struct InMemoryDestinationStore {
    records: RwLock<BTreeMap<DestinationId, DestinationPayload>>,
    next_id: AtomicU64,
}

impl InMemoryDestinationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored destinations.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when the store holds no destination.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn allocate_id(&self) -> Result<DestinationId> {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        DestinationId::parse(format!("dst_{n}")).map_err(|error| {
            ErrorEnvelope::unexpected(
                ErrorCode::internal(),
                format!("failed to allocate destination id: {error}"),
                ErrorClass::NonRetriable,
            )
        })
    }
}

impl DestinationStorePort for InMemoryDestinationStore {
    fn insert(
        &self,
        ctx: &RequestContext,
        payload: Validated<DestinationPayload>,
    ) -> BoxFuture<'_, Result<DestinationRecord>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            ctx.ensure_not_cancelled("memory_store.insert")?;
            let id = self.allocate_id()?;
            let payload = payload.into_inner();
            self.records
                .write()
                .await
                .insert(id.clone(), payload.clone());
            tracing::debug!(destination_id = %id, "destination inserted");
            Ok(DestinationRecord { id, payload })
        })
    }

    fn get(
        &self,
        ctx: &RequestContext,
        id: DestinationId,
    ) -> BoxFuture<'_, Result<Option<DestinationRecord>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            ctx.ensure_not_cancelled("memory_store.get")?;
            let records = self.records.read().await;
            Ok(records.get(&id).map(|payload| DestinationRecord {
                id: id.clone(),
                payload: payload.clone(),
            }))
        })
    }

    fn replace(
        &self,
        ctx: &RequestContext,
        id: DestinationId,
        payload: Validated<DestinationPayload>,
    ) -> BoxFuture<'_, Result<Option<DestinationRecord>>> {
        let ctx = ctx.clone();
        Box::pin(async move {
            ctx.ensure_not_cancelled("memory_store.replace")?;
            let mut records = self.records.write().await;
            let Some(slot) = records.get_mut(&id) else {
                return Ok(None);
            };
            let payload = payload.into_inner();
            slot.clone_from(&payload);
            tracing::debug!(destination_id = %id, "destination replaced");
            Ok(Some(DestinationRecord { id, payload }))
        })
    }
}

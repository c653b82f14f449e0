//! Event logging and error shaping shared by the use cases.

use crate::deps::DestinationDeps;
use destination_guard_domain::DestinationId;
use destination_guard_ports::{LogEvent, LogFields, LogLevel};
use destination_guard_shared::{ErrorCode, ErrorEnvelope, RequestContext};
use destination_guard_validation::DestinationValidationError;
use serde_json::Value;

pub(crate) const EVENT_REJECTED: &str = "destination.validate.rejected";
pub(crate) const EVENT_CREATED: &str = "destination.create.ok";
pub(crate) const EVENT_UPDATED: &str = "destination.update.ok";
pub(crate) const EVENT_STORE_FAILED: &str = "destination.store.failed";
pub(crate) const EVENT_ABORTED: &str = "destination.request.aborted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Create,
    Replace,
    Patch,
}

impl Operation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Replace => "replace",
            Self::Patch => "patch",
        }
    }
}

fn base_fields(
    ctx: &RequestContext,
    operation: Operation,
    id: Option<&DestinationId>,
) -> LogFields {
    let mut fields = LogFields::new();
    fields.insert(
        "correlationId".into(),
        Value::String(ctx.correlation_id().as_str().to_owned()),
    );
    fields.insert(
        "operation".into(),
        Value::String(operation.as_str().to_owned()),
    );
    if let Some(id) = id {
        fields.insert("destinationId".into(), Value::String(id.as_str().to_owned()));
    }
    fields
}

/// Convert a validation failure into an envelope, logging it when enabled.
pub(crate) fn rejected(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    operation: Operation,
    id: Option<&DestinationId>,
    error: DestinationValidationError,
) -> ErrorEnvelope {
    tracing::debug!(kind = error.kind().as_code(), field = %error.field(), "payload rejected");
    let envelope = ErrorEnvelope::from(error);
    if !deps.log_rejections {
        return envelope;
    }
    if let Some(logger) = deps.logger.as_ref() {
        let mut fields = base_fields(ctx, operation, id);
        if let Some(field) = envelope.field() {
            fields.insert("field".into(), Value::String(field.to_owned()));
        }
        logger.log(
            LogEvent::new(EVENT_REJECTED, LogLevel::Warn, "Destination payload rejected")
                .with_fields(fields)
                .with_error(&envelope),
        );
    }
    envelope
}

/// Log a store failure and hand the error back untouched.
pub(crate) fn store_failed(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    operation: Operation,
    id: Option<&DestinationId>,
    error: ErrorEnvelope,
) -> ErrorEnvelope {
    if let Some(logger) = deps.logger.as_ref() {
        let event = if error.is_cancelled() {
            LogEvent::new(EVENT_ABORTED, LogLevel::Info, "Destination request aborted")
        } else {
            LogEvent::new(EVENT_STORE_FAILED, LogLevel::Error, "Destination store failed")
        };
        logger.log(
            event
                .with_fields(base_fields(ctx, operation, id))
                .with_error(&error),
        );
    }
    error
}

pub(crate) fn succeeded(
    ctx: &RequestContext,
    deps: &DestinationDeps,
    operation: Operation,
    id: &DestinationId,
) {
    let Some(logger) = deps.logger.as_ref() else {
        return;
    };
    let (event, message) = match operation {
        Operation::Create => (EVENT_CREATED, "Destination created"),
        Operation::Replace | Operation::Patch => (EVENT_UPDATED, "Destination updated"),
    };
    logger.info(event, message, Some(base_fields(ctx, operation, Some(id))));
}

pub(crate) fn not_found(id: &DestinationId) -> ErrorEnvelope {
    ErrorEnvelope::expected(
        ErrorCode::new("destination", "not_found"),
        format!("Destination {id} not found."),
    )
    .with_metadata("destinationId", id.as_str())
}

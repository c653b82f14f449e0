//! Dependencies shared by the destination use cases.

use destination_guard_config::GuardConfig;
use destination_guard_ports::{DestinationStorePort, LoggerPort};
use std::sync::Arc;

/// Dependencies required by create/replace/patch.
#[derive(Clone)]
pub struct DestinationDeps {
    /// Persistence adapter.
    pub store: Arc<dyn DestinationStorePort>,
    /// Optional logger.
    pub logger: Option<Arc<dyn LoggerPort>>,
    /// Emit `destination.validate.rejected` for rejected payloads.
    pub log_rejections: bool,
}

impl DestinationDeps {
    /// Dependencies without a logger.
    #[must_use]
    pub fn new(store: Arc<dyn DestinationStorePort>) -> Self {
        Self {
            store,
            logger: None,
            log_rejections: true,
        }
    }

    /// Dependencies driven by a loaded config.
    ///
    /// `validation.logRejections` decides whether rejected payloads are
    /// logged; the logger is expected to be built from `config.logging`.
    #[must_use]
    pub fn from_config(
        config: &GuardConfig,
        store: Arc<dyn DestinationStorePort>,
        logger: Arc<dyn LoggerPort>,
    ) -> Self {
        Self::new(store)
            .with_logger(logger)
            .with_log_rejections(config.validation.log_rejections)
    }

    /// Attach a logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn LoggerPort>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Toggle rejection logging.
    #[must_use]
    pub const fn with_log_rejections(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }
}

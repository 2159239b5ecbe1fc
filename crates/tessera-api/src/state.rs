//! Shared state handed to every handler.

use std::sync::Arc;

use tessera_config::Config;
use tessera_data::UserStore;
use tessera_telemetry::Metrics;

/// Built once at startup and never mutated afterwards.
pub(crate) struct ApiState {
    pub(crate) config: Config,
    pub(crate) users: Arc<dyn UserStore>,
    pub(crate) telemetry: Metrics,
}

impl ApiState {
    pub(crate) fn new(config: Config, users: Arc<dyn UserStore>, telemetry: Metrics) -> Self {
        Self {
            config,
            users,
            telemetry,
        }
    }
}

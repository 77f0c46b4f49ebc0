use std::sync::Arc;

use crate::config::ServerConfig;
use crate::forwarder::Forwarder;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub forwarder: Arc<dyn Forwarder>,
}

impl AppState {
    pub fn new(config: ServerConfig, forwarder: impl Forwarder + 'static) -> Self {
        Self {
            config: Arc::new(config),
            forwarder: Arc::new(forwarder),
        }
    }
}

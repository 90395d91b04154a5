use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use facegate::{AzureFaceClient, FaceService};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Face service client (shared across requests, read-only)
    pub faces: Arc<dyn FaceService>,
}

impl ServerState {
    /// Create new server state backed by the Azure face client
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let client = AzureFaceClient::new(&config.vendor)
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(Self::with_service(config, Arc::new(client)))
    }

    /// Create state around an existing face service
    pub fn with_service(config: ServerConfig, faces: Arc<dyn FaceService>) -> Self {
        Self {
            config: Arc::new(config),
            faces,
        }
    }
}

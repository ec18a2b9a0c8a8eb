//! Boom Ops portal server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main portal server
pub struct PortalServer {
    config: WebConfig,
    state: AppState,
}

impl PortalServer {
    /// Create a new portal server, opening the client store.
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone())?;
        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting Boom Ops portal");
        info!("📍 Server address: http://{}", address);
        info!("🗄️  Client document: {}", self.config.data_file);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address).await.map_err(WebError::Server)?;

        info!("✅ Portal listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for PortalServer
pub struct PortalServerBuilder {
    config: WebConfig,
}

impl PortalServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn with_config(config: WebConfig) -> Self {
        Self { config }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the client document path
    pub fn data_file<S: Into<String>>(mut self, data_file: S) -> Self {
        self.config.data_file = data_file.into();
        self
    }

    /// Set static files directory
    pub fn static_dir<S: Into<String>>(mut self, static_dir: S) -> Self {
        self.config.static_dir = static_dir.into();
        self
    }

    /// Build the server
    pub fn build(self) -> WebResult<PortalServer> {
        PortalServer::new(self.config)
    }
}

impl Default for PortalServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Application state shared across handlers

use std::sync::Arc;

use boomops_core::{ClientRepository, CredentialTable, SessionStore};
use tracing::info;

use crate::{WebConfig, WebResult};

/// Shared application state: configuration, the immutable credential table,
/// the session store and the client repository.
#[derive(Clone)]
pub struct AppState {
    pub config: WebConfig,
    pub credentials: Arc<CredentialTable>,
    pub sessions: Arc<SessionStore>,
    pub clients: Arc<ClientRepository>,
}

impl AppState {
    /// Create application state with credentials from the environment.
    pub fn new(config: WebConfig) -> WebResult<Self> {
        Self::with_credentials(config, CredentialTable::from_env())
    }

    /// Create application state with an explicit credential table.
    pub fn with_credentials(config: WebConfig, credentials: CredentialTable) -> WebResult<Self> {
        let clients = ClientRepository::open(&config.data_file)?;
        info!("Client store ready: {}", clients.path().display());

        Ok(Self {
            config,
            credentials: Arc::new(credentials),
            sessions: Arc::new(SessionStore::default()),
            clients: Arc::new(clients),
        })
    }
}

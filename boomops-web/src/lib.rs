//! Boom Ops Portal Web Server
//!
//! HTTP layer over `boomops-core`: session-cookie authentication, role
//! authorization and the client CRUD API, plus the login/logout pages.

pub mod auth;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use server::PortalServer;
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use boomops_core::RepoError;
use serde_json::json;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::page_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path of the persisted client document
    pub data_file: String,
    /// Static files directory (login and app pages)
    pub static_dir: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3002,
            data_file: "data/clients.json".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("BOOMOPS_HOST").unwrap_or(defaults.host),
            port: std::env::var("BOOMOPS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_file: std::env::var("BOOMOPS_DATA_FILE").unwrap_or(defaults.data_file),
            static_dir: std::env::var("BOOMOPS_STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Not logged in")]
    AuthRequired,

    #[error("Admin only")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepoError> for WebError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => WebError::NotFound,
            RepoError::Io(err) => WebError::Server(err),
            RepoError::Json(err) => WebError::Storage(err.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::AuthRequired => (StatusCode::UNAUTHORIZED, self.to_string()),
            WebError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            WebError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            WebError::Server(err) => {
                tracing::error!("Server error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            WebError::Storage(err) => {
                tracing::error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boomops_web=debug,boomops_core=debug,tower_http=debug".into()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_original_tool() {
        let config = WebConfig::default();
        assert_eq!(config.port, 3002);
        assert_eq!(config.data_file, "data/clients.json");
        assert_eq!(config.address(), "127.0.0.1:3002");
    }

    #[test]
    fn repo_errors_map_to_web_errors() {
        let err: WebError = RepoError::NotFound(9).into();
        assert!(matches!(err, WebError::NotFound));
    }
}

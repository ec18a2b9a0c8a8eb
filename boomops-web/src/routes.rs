//! Route definitions for the Boom Ops portal

use crate::{handlers, AppState};
use axum::{
    routing::{get, put},
    Router,
};

/// JSON API routes, nested under /api
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/me", get(handlers::current_user))
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/clients/{id}",
            put(handlers::update_client).delete(handlers::delete_client),
        )
}

/// Browser-facing routes: pages, login and logout
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::app_page))
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/logout", get(handlers::logout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebConfig;
    use axum::http::StatusCode;
    use boomops_core::CredentialTable;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_route() {
        let dir = tempfile::tempdir().unwrap();
        let config = WebConfig {
            data_file: dir.path().join("clients.json").display().to_string(),
            ..WebConfig::default()
        };
        let state = AppState::with_credentials(config, CredentialTable::new(vec![])).unwrap();
        let app = api_routes().with_state(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

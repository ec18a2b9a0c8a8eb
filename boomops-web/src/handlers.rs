//! HTTP request handlers for the Boom Ops portal
//!
//! API handlers return JSON; the login/logout handlers speak the browser
//! flow of the original tool (form post, redirects, session cookie).

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use boomops_core::{ClientObject, Principal};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::auth::{session_token, AdminUser, OptionalUser, PageUser, SessionUser, SESSION_COOKIE};
use crate::{AppState, WebResult};

/// Session cookie lifetime in seconds, matching the store's 24 h expiry.
const COOKIE_MAX_AGE: u64 = 24 * 60 * 60;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: String,
}

/// Login form body
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Current principal for the session cookie
pub async fn current_user(SessionUser(principal): SessionUser) -> Json<Principal> {
    Json(principal)
}

/// Full client collection, available to any authenticated role
pub async fn list_clients(
    State(state): State<AppState>,
    SessionUser(_principal): SessionUser,
) -> WebResult<Json<Vec<ClientObject>>> {
    let clients = state.clients.list()?;
    Ok(Json(clients))
}

/// Create a client record. Admin only.
pub async fn create_client(
    State(state): State<AppState>,
    AdminUser(principal): AdminUser,
    Json(partial): Json<ClientObject>,
) -> WebResult<Json<ClientObject>> {
    let record = state.clients.create(partial)?;
    info!("Client created by {}", principal.username);
    Ok(Json(record))
}

/// Partially update a client record. Admin only.
pub async fn update_client(
    State(state): State<AppState>,
    AdminUser(principal): AdminUser,
    Path(id): Path<u64>,
    Json(partial): Json<ClientObject>,
) -> WebResult<Json<ClientObject>> {
    let record = state.clients.update(id, partial)?;
    info!("Client {} updated by {}", id, principal.username);
    Ok(Json(record))
}

/// Delete a client record. Admin only.
pub async fn delete_client(
    State(state): State<AppState>,
    AdminUser(principal): AdminUser,
    Path(id): Path<u64>,
) -> WebResult<Json<serde_json::Value>> {
    state.clients.delete(id)?;
    info!("Client {} deleted by {}", id, principal.username);
    Ok(Json(json!({ "success": true })))
}

/// Login endpoint: checks the credential table, issues a session cookie and
/// redirects to the app, or back to the login page with an error indicator.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    info!("Login attempt: {}", form.username);

    match state.credentials.authenticate(&form.username, &form.password) {
        Some(principal) => {
            let username = principal.username.clone();
            let token = state.sessions.create(principal);
            let cookie = format!(
                "{SESSION_COOKIE}={token}; HttpOnly; Path=/; Max-Age={COOKIE_MAX_AGE}"
            );
            info!("User logged in: {}", username);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        None => Redirect::to("/login?error=1").into_response(),
    }
}

/// Logout endpoint: destroys the session (idempotent) and clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.destroy(&token);
    }
    let clear = format!("{SESSION_COOKIE}=; HttpOnly; Path=/; Max-Age=0");
    ([(header::SET_COOKIE, clear)], Redirect::to("/login")).into_response()
}

/// The portal page. Unauthenticated visitors are redirected to /login.
pub async fn app_page(State(state): State<AppState>, PageUser(_principal): PageUser) -> Response {
    serve_page(&state, "app.html").await
}

/// The login page. Already-authenticated visitors are redirected to /.
pub async fn login_page(
    State(state): State<AppState>,
    OptionalUser(principal): OptionalUser,
) -> Response {
    if principal.is_some() {
        return Redirect::to("/").into_response();
    }
    serve_page(&state, "login.html").await
}

async fn serve_page(state: &AppState, file: &str) -> Response {
    let path = std::path::Path::new(&state.config.static_dir).join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!("Failed to read page {}: {}", path.display(), err);
            (StatusCode::NOT_FOUND, "page not found").into_response()
        }
    }
}

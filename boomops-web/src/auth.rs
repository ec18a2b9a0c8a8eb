//! Session-cookie authentication and authorization extractors

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use boomops_core::Principal;
use tracing::warn;

use crate::{AppState, WebError};

/// Name of the session cookie issued on login
pub const SESSION_COOKIE: &str = "boomops_session";

/// Extract the session token from the request's Cookie header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    for cookie in cookies.split(';') {
        if let Some((name, value)) = cookie.trim().split_once('=') {
            if name == SESSION_COOKIE {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn resolve_session(headers: &HeaderMap, state: &AppState) -> Option<Principal> {
    let token = session_token(headers)?;
    state.sessions.resolve(&token)
}

/// Authenticated principal for API endpoints. Rejects with 401.
pub struct SessionUser(pub Principal);

impl<S> FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        resolve_session(&parts.headers, &app_state)
            .map(SessionUser)
            .ok_or(WebError::AuthRequired)
    }
}

/// Admin principal for mutation endpoints. Rejects with 401 when there is no
/// session and 403 when the session's role is not admin.
pub struct AdminUser(pub Principal);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionUser(principal) = SessionUser::from_request_parts(parts, state).await?;

        if principal.role.is_admin() {
            Ok(AdminUser(principal))
        } else {
            warn!(
                "Admin access required but user '{}' is not admin",
                principal.username
            );
            Err(WebError::Forbidden)
        }
    }
}

/// Optional principal - never fails, used by the login page to redirect
/// already-authenticated users.
pub struct OptionalUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(OptionalUser(resolve_session(&parts.headers, &app_state)))
    }
}

/// Authenticated principal for HTML pages. Rejects by redirecting to the
/// login page instead of returning a JSON error.
pub struct PageUser(pub Principal);

/// Authentication redirect for failed page auth
#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary("/login").into_response()
    }
}

impl<S> FromRequestParts<S> for PageUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        resolve_session(&parts.headers, &app_state)
            .map(PageUser)
            .ok_or(AuthRedirect)
    }
}

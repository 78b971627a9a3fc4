//! Static-credential auth
//!
//! One configured username/password pair exchanges for one static bearer
//! token. When `require_token` is set, catalog routes reject requests that
//! don't present that token.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use super::server::AppState;

/// Login credentials and the token they unlock
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub token: String,
    /// Gate catalog routes behind the bearer token
    pub require_token: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "Admin123".to_string(),
            token: "dummy-token-123".to_string(),
            require_token: false,
        }
    }
}

impl AuthConfig {
    /// Check a username/password pair, returning the token on match.
    pub fn login(&self, username: &str, password: &str) -> Option<&str> {
        (username == self.username && password == self.password).then_some(self.token.as_str())
    }

    pub fn accepts(&self, token: Option<&str>) -> bool {
        token == Some(self.token.as_str())
    }
}

/// Middleware: reject requests without the configured bearer token (403).
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.auth.accepts(bearer_token(request.headers())) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "rejected request without valid token"
        );
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

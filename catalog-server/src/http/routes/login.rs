//! Login endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::extractors::JsonBody;
use crate::http::server::AppState;

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response, `token` on success and `message` on failure
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /login - exchange credentials for the bearer token
async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    match state.auth.login(&req.username, &req.password) {
        Some(token) => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                token: Some(token.to_owned()),
                message: None,
            }),
        ),
        None => {
            tracing::warn!(username = %req.username, "login failed");
            (
                StatusCode::UNAUTHORIZED,
                Json(LoginResponse {
                    success: false,
                    token: None,
                    message: Some("Invalid credentials".to_owned()),
                }),
            )
        }
    }
}

/// Login routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

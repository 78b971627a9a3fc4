//! Health check endpoint
//!
//! Reports the crate version and whether the catalog database answers.
//! Never token-gated.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - 200 when the store answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = sqlx::query("SELECT 1").execute(&state.pool).await;

    let (status, code, database) = match reachable {
        Ok(_) => ("ok", StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::http::AuthConfig;

    async fn state() -> Arc<AppState> {
        Arc::new(AppState {
            pool: create_memory_pool().await.unwrap(),
            auth: AuthConfig::default(),
        })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (code, Json(body)) = health(State(state().await)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[tokio::test]
    async fn closed_pool_is_degraded() {
        let state = state().await;
        state.pool.close().await;

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.database, "unreachable");
    }
}

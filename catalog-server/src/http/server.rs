//! Axum server setup
//!
//! Server skeleton with:
//! - Configurable CORS (listed origins, or permissive for development)
//! - Tracing middleware
//! - Optional bearer-token gate on catalog routes
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::{middleware, Router};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::{self, AuthConfig};
use crate::db::apply_schema;
use super::routes;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,

    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,

    /// Allow permissive CORS (default: false = `cors_origins` only)
    ///
    /// WARNING: Setting this to true allows any origin.
    /// Only use for development.
    pub cors_permissive: bool,

    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origins: vec!["http://localhost:3001".to_string()],
            cors_permissive: false,
            auth: AuthConfig::default(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthConfig,
}

/// Build the application router with all routes.
///
/// `/health` and `/login` are always open; the catalog routes are gated
/// when `config.auth.require_token` is set.
pub fn build_router(pool: SqlitePool, config: &ServerConfig) -> Result<Router, ServerError> {
    let state = Arc::new(AppState {
        pool,
        auth: config.auth.clone(),
    });

    let catalog = Router::new()
        .merge(routes::enterprises::router())
        .merge(routes::products::router())
        .merge(routes::news::router())
        .merge(routes::sliders::router());

    let catalog = if config.auth.require_token {
        catalog.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ))
    } else {
        catalog
    };

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::login::router())
        .merge(catalog)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("./database.db").await?;
/// let config = ServerConfig::default();
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    // Idempotent; also fails fast on an unusable pool
    apply_schema(&pool).await?;
    let app = build_router(pool, &config)?;

    if config.auth.require_token {
        tracing::info!("Catalog routes require a bearer token");
    }

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

//! HTTP server command for the catalog API

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::{create_pool, run_server, AuthConfig, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CATALOG_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Origins allowed to call the API from a browser (comma-separated)
    #[arg(
        long = "cors-origin",
        env = "CATALOG_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3001"
    )]
    pub cors_origins: Vec<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Require the bearer token on every catalog route
    #[arg(long, env = "CATALOG_REQUIRE_TOKEN")]
    pub require_token: bool,

    /// Username accepted by POST /login
    #[arg(long, env = "CATALOG_ADMIN_USER", default_value = "admin")]
    pub admin_user: String,

    /// Password accepted by POST /login
    #[arg(
        long,
        env = "CATALOG_ADMIN_PASSWORD",
        default_value = "Admin123",
        hide_env_values = true
    )]
    pub admin_password: String,

    /// Bearer token handed out by POST /login
    #[arg(
        long,
        env = "CATALOG_TOKEN",
        default_value = "dummy-token-123",
        hide_env_values = true
    )]
    pub token: String,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_origins: self.cors_origins.clone(),
            cors_permissive: self.cors_permissive,
            auth: AuthConfig {
                username: self.admin_user.clone(),
                password: self.admin_password.clone(),
                token: self.token.clone(),
                require_token: self.require_token,
            },
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_path = &args.db.db_path;
    tracing::info!("Opening database at {}", db_path.display());

    // Opened once, shared by every request
    let pool = create_pool(db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let config = args.server_config();
    tracing::info!("Starting catalog server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

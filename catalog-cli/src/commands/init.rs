//! Create the catalog database and schema without serving

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::create_pool;

use super::DatabaseArgs;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Open (or create) the database file and apply the schema.
pub async fn run_init(args: InitArgs) -> Result<()> {
    let path = &args.db.db_path;

    let pool = create_pool(path)
        .await
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    pool.close().await;

    tracing::info!(path = %path.display(), "catalog schema applied");
    println!("Catalog database ready at {}", path.display());
    Ok(())
}

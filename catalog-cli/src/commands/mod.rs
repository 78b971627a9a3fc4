//! Command implementations for catalogctl

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;

use std::path::PathBuf;

use clap::Args;

/// Database location shared by every command that opens the catalog
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// SQLite database file (created if missing)
    #[arg(long, env = "CATALOG_DB_PATH", default_value = "database.db")]
    pub db_path: PathBuf,
}

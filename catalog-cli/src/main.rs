//! catalogctl - run and manage the content catalog backend
//!
//! Subcommands:
//! - `serve`: start the REST API over a SQLite catalog
//! - `init`: create the database file and schema, then exit
//! - `completions`: print shell completions

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod tracing_setup;

use commands::{init::InitArgs, serve::ServeArgs};

#[derive(Parser, Debug)]
#[command(
    name = "catalogctl",
    author,
    version,
    about = "REST backend for enterprises, products, news and the homepage slider"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the catalog HTTP server
    Serve(ServeArgs),
    /// Create the database and schema without serving
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Init(args) => commands::run_init(args).await?,
        Commands::Completions(args) => run_completions(args),
    }

    Ok(())
}

fn run_completions(args: CompletionsArgs) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout());
}

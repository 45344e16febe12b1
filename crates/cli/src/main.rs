//! Sports Store CLI - Database migrations and sample data.
//!
//! # Usage
//!
//! ```bash
//! # Create or upgrade the database schema (catalog, orders, sessions)
//! ss-cli migrate
//!
//! # Load the sample catalog into an empty database
//! ss-cli seed
//! ```
//!
//! Both commands read `STORE_DATABASE_URL` (or `DATABASE_URL`), loading a
//! `.env` file if present.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ss-cli")]
#[command(author, version, about = "Sports Store CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with sample products
    Seed {
        /// Insert the sample products even if the catalog is not empty
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => commands::seed::run(force).await?,
    }
    Ok(())
}

//! Maintenance CLI for the StealthNap database.
//!
//! ```bash
//! db-admin --database-url postgres://localhost/stealthnap clear-gear
//! db-admin promote ranger@example.com   # DATABASE_URL from the environment
//! ```

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use sea_orm::Database;

use stealthnap_core::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Maintenance commands for the StealthNap database")]
struct Args {
    /// sea-orm connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delete every gear entry
    ClearGear,
    /// Delete every location
    ClearLocations,
    /// Give a user the admin role
    Promote {
        /// Email the account was registered with
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing("warn");
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("connect to database")?;

    match args.command {
        Command::ClearGear => {
            let n = db_admin::clear_gear(&db).await?;
            println!("Deleted {n} gear entries");
        }
        Command::ClearLocations => {
            let n = db_admin::clear_locations(&db).await?;
            println!("Deleted {n} locations");
        }
        Command::Promote { email } => {
            db_admin::promote(&db, &email).await?;
            println!("{email} is now an admin");
        }
    }
    Ok(())
}

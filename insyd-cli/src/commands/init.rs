//! Database bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use insyd_server::db::{initialize, open_pool, PoolOptions};

use super::DbArgs;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub db: DbArgs,

    /// Create tables only, without sample data
    #[arg(long)]
    pub no_seed: bool,
}

/// Create the schema (and seed data) without starting the server
pub async fn run_init(args: InitArgs) -> Result<()> {
    let db_path = args.db.resolve()?;
    let pool = open_pool(&db_path, PoolOptions::default())
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    let report = initialize(&pool, !args.no_seed)
        .await
        .context("Database initialization failed")?;
    pool.close().await;

    println!(
        "Database ready at {} (seeded: {})",
        db_path.display(),
        report.seeded
    );
    Ok(())
}

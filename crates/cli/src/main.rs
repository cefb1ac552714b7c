//! `mergington` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — migrate, seed an empty store, and start the API server.
//! - `migrate` — run pending database migrations.
//! - `seed`    — migrate and insert the activity catalog into an empty store.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mergington",
    about = "Extracurricular activity signups for Mergington High School",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://activities.db")]
    database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
        bind: String,
        /// Directory with the front-end assets served under `/static`.
        #[arg(long, env = "STATIC_DIR", default_value = "static")]
        static_dir: std::path::PathBuf,
        #[command(flatten)]
        db: DatabaseArgs,
    },
    /// Run pending database migrations.
    Migrate {
        #[command(flatten)]
        db: DatabaseArgs,
    },
    /// Insert the activity catalog if the store is empty.
    Seed {
        #[command(flatten)]
        db: DatabaseArgs,
    },
}

async fn open_store(args: &DatabaseArgs) -> anyhow::Result<db::DbPool> {
    let pool = db::pool::create_pool(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("failed to connect to {}", args.database_url))?;
    db::pool::run_migrations(&pool)
        .await
        .context("migration failed")?;
    Ok(pool)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, static_dir, db } => {
            let pool = open_store(&db).await?;
            registrar::seed_if_empty(&pool)
                .await
                .context("failed to seed activity catalog")?;

            info!("Starting API server on {bind}");
            api::serve(api::ServerConfig { bind, static_dir }, pool)
                .await
                .context("API server failed")?;
        }
        Command::Migrate { db } => {
            info!("Running migrations against {}", db.database_url);
            open_store(&db).await?;
            info!("Migrations applied successfully");
        }
        Command::Seed { db } => {
            let pool = open_store(&db).await?;
            let seeded = registrar::seed_if_empty(&pool)
                .await
                .context("failed to seed activity catalog")?;
            if seeded {
                info!("Activity catalog seeded");
            } else {
                info!("Store already holds activities, nothing to seed");
            }
        }
    }

    Ok(())
}

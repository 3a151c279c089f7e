//! Campus events server
//!
//! Runs the REST API together with the daily reconciliation sweeps
//! (overdue event cancellation and minor-tag synchronisation).

use anyhow::{Context, Result};
use campus_api::{ApiServer, ApiServerConfig};
use campus_core::blob::FsBlobStore;
use campus_core::reconciler::Scheduler;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Campus events - administrative backend for curator-run student events
#[derive(Parser, Debug)]
#[command(name = "campus-server")]
#[command(about = "Campus events - administrative backend for curator-run student events")]
#[command(version)]
struct Cli {
    /// Database connection string (SQLite or PostgreSQL)
    #[arg(long, env = "CAMPUS_DATABASE_URL", default_value = "sqlite://campus.db?mode=rwc")]
    database_url: String,

    /// Address to bind the API server on
    #[arg(long, env = "CAMPUS_BIND_ADDR", default_value = "127.0.0.1:8080")]
    bind_addr: SocketAddr,

    /// Secret used to sign session tokens
    #[arg(long, env = "CAMPUS_JWT_SECRET")]
    jwt_secret: String,

    /// Directory for uploaded media files
    #[arg(long, env = "CAMPUS_MEDIA_DIR", default_value = "./media")]
    media_dir: PathBuf,

    /// Disable the browser CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Setup logging with the specified log level
fn setup_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!(
        "Campus server {} ({} built {})",
        env!("GIT_TAG"),
        env!("GIT_HASH"),
        env!("BUILD_TIME")
    );

    let db = campus_db::connect(&cli.database_url)
        .await
        .context("Failed to connect to database")?;
    campus_db::migrate(&db)
        .await
        .context("Failed to run migrations")?;
    info!("Database ready at {}", cli.database_url);

    let scheduler = Scheduler::start(db.clone());

    let blob_store = Arc::new(FsBlobStore::new(cli.media_dir, "/uploads"));

    let config = ApiServerConfig {
        bind_addr: cli.bind_addr,
        enable_cors: !cli.no_cors,
        jwt_secret: cli.jwt_secret,
    };
    let server = ApiServer::new(config, db, blob_store);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let server_task = tokio::spawn(server.start());

    tokio::select! {
        _ = &mut ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        result = server_task => {
            match result {
                Ok(Ok(())) => info!("Server stopped normally"),
                Ok(Err(e)) => {
                    error!("Server error: {:#}", e);
                    scheduler.shutdown();
                    return Err(e);
                }
                Err(e) => {
                    error!("Server task panicked: {}", e);
                    scheduler.shutdown();
                    return Err(e.into());
                }
            }
        }
    }

    scheduler.shutdown();
    info!("Campus server stopped");
    Ok(())
}

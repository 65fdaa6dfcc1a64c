//! `student-registry` binary: load config, open the database, serve.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use student_registry::{ConfigLoader, Module, Router, SqlStore, Students};

/// HTTP service for student records
#[derive(Parser, Debug)]
#[command(name = "student-registry")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, env = "STUDENT_REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Database URL: a file path, `:memory:`, or `libsql://...`
    #[arg(long)]
    database_url: Option<String>,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> student_registry::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::default().load(
        cli.config.as_deref(),
        cli.host.as_deref(),
        cli.port,
        cli.database_url.as_deref(),
    )?;
    init_logging(&config.log.filter);

    let db = student_registry::db::open(&config.database.url).await?;
    let students = Students::new(Arc::new(SqlStore::new(db)));

    let mut router = Router::new();
    students.routes(&mut router);
    info!("Module {} registered", students.name());

    let server = student_registry::server::start(config, router.into_handle()).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    server.shutdown().await
}

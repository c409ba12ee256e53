//! vaportrack server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, optionally seeds the demo wishlist entry, and serves the
//! `GetTrackedItems` RPC over HTTP.
//!
//! ```
//! cargo run -p vaportrack-server --bin vaportrack -- --config config.toml
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use vaportrack_server::{ServerConfig, app, expand_tilde, seed};
use vaportrack_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "VaporTrack wishlist engine")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Skip seeding the demo wishlist entry, whatever the config says.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  tracing::info!("booting VaporTrack engine");

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load config from {:?}", cli.config))?;

  let store_path = expand_tilde(&server_cfg.store_path);

  // Connection and schema failures are fatal.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!(path = %store_path.display(), "database connection established");

  if server_cfg.seed && !cli.no_seed {
    seed(&store).await;
  }

  let router = app(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!("listening on http://{address}");

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("shut down");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}

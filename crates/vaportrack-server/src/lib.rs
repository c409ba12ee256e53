//! Process bootstrap for the VaporTrack engine.
//!
//! Configuration, optional seeding, and router assembly live here so the
//! binary in `main.rs` stays a thin shell and the wiring can be tested.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
  time::Duration,
};

use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use vaportrack_api::{TrackerService, rpc_router};
use vaportrack_core::{item::TrackedItem, store::WishlistStore};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `VAPORTRACK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  /// Upsert the demo wishlist entry at startup.
  pub seed:                 bool,
  pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "0.0.0.0".to_string(),
      port:                 50051,
      store_path:           PathBuf::from("vaportrack.db"),
      seed:                 true,
      request_timeout_secs: None,
    }
  }
}

impl ServerConfig {
  /// Layer the (optional) TOML file at `path` under the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("VAPORTRACK"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Seeding ──────────────────────────────────────────────────────────────────

pub fn seed_item() -> TrackedItem {
  TrackedItem::new("1091500", "user_1", "Cyberpunk 2077", 29.99)
}

/// Upsert [`seed_item`]. Idempotent; a failure is logged and ignored.
pub async fn seed<S: WishlistStore>(store: &S) {
  match store.upsert_item(seed_item()).await {
    Ok(()) => tracing::info!("seeded demo wishlist entry"),
    Err(e) => tracing::warn!(error = %e, "failed to seed demo wishlist entry"),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Assemble the full application router over `store`.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: WishlistStore + 'static,
{
  let mut service = TrackerService::new(store);
  if let Some(secs) = config.request_timeout_secs {
    service = service.with_timeout(Duration::from_secs(secs));
  }

  rpc_router(service).layer(TraceLayer::new_for_http())
}

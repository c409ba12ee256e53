//! Error type for `vaportrack-store-sqlite`.
//!
//! `Connection` and `Schema` only come out of [`SqliteStore::open`] and are
//! fatal at startup. `Write` and `Read` are per-call and recoverable.
//!
//! [`SqliteStore::open`]: crate::SqliteStore::open

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to open database: {0}")]
  Connection(#[source] tokio_rusqlite::Error),

  #[error("failed to create tables: {0}")]
  Schema(#[source] tokio_rusqlite::Error),

  #[error("write failed: {0}")]
  Write(#[source] tokio_rusqlite::Error),

  #[error("read failed: {0}")]
  Read(#[source] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl Error {
  /// `true` for the startup errors that should abort the process.
  pub fn is_fatal(&self) -> bool {
    matches!(self, Self::Connection(_) | Self::Schema(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for `vaportrack-core`.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("tracked item title must not be empty")]
  EmptyTitle,

  #[error("{field} must be non-negative, got {value}")]
  NegativePrice { field: &'static str, value: f64 },

  #[error("recorded_at {0} is outside years 0000-9999")]
  TimestampOutOfRange(DateTime<Utc>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Encoding and decoding helpers between Rust domain types and the column
//! representations stored in SQLite.
//!
//! Timestamps are stored as RFC 3339 UTC strings; the schema default writes
//! the same shape (`2026-01-01T00:00:00.000Z`). Booleans are integers.

use chrono::{DateTime, SecondsFormat, Utc};
use vaportrack_core::{item::TrackedItem, price::PriceObservation};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

/// SQL expression producing the current time in the stored format.
pub const NOW_SQL: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub fn tracked_item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TrackedItem> {
  Ok(TrackedItem {
    item_id:      row.get(0)?,
    user_id:      row.get(1)?,
    title:        row.get(2)?,
    target_price: row.get(3)?,
    is_active:    row.get(4)?,
  })
}

/// Raw values read directly from a `price_history` row.
pub struct RawPriceObservation {
  pub id:           i64,
  pub item_id:      String,
  pub sale_price:   f64,
  pub normal_price: f64,
  pub recorded_at:  String,
}

impl RawPriceObservation {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      item_id:      row.get(1)?,
      sale_price:   row.get(2)?,
      normal_price: row.get(3)?,
      recorded_at:  row.get(4)?,
    })
  }

  pub fn into_observation(self) -> Result<PriceObservation> {
    Ok(PriceObservation {
      id:           self.id,
      item_id:      self.item_id,
      sale_price:   self.sale_price,
      normal_price: self.normal_price,
      recorded_at:  decode_dt(&self.recorded_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn encoded_timestamps_sort_like_the_schema_default() {
    let dt = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 5).unwrap();
    let s = encode_dt(dt);
    assert_eq!(s, "2026-03-01T12:30:05.000Z");
    assert_eq!(decode_dt(&s).unwrap(), dt);
  }

  #[test]
  fn decode_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}

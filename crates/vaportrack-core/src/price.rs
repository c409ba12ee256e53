//! Price observations — the append-only price history of an item.

use chrono::{DateTime, Datelike as _, SubsecRound as _, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, item::check_price};

/// Sub-second digits a stored `recorded_at` keeps.
pub const RECORDED_AT_SUBSEC_DIGITS: u16 = 3;

/// Truncate `dt` to the precision backends store (milliseconds).
pub fn truncate_recorded_at(dt: DateTime<Utc>) -> DateTime<Utc> {
  dt.trunc_subsecs(RECORDED_AT_SUBSEC_DIGITS)
}

/// Input to [`WishlistStore::append_price_observation`](crate::store::WishlistStore::append_price_observation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPriceObservation {
  pub item_id:      String,
  pub sale_price:   f64,
  pub normal_price: f64,
  /// When `None`, the store stamps the write time. Stored with millisecond
  /// precision (finer digits are truncated); the year must be 0000-9999.
  pub recorded_at:  Option<DateTime<Utc>>,
}

impl NewPriceObservation {
  pub fn new(item_id: impl Into<String>, sale_price: f64, normal_price: f64) -> Self {
    Self {
      item_id: item_id.into(),
      sale_price,
      normal_price,
      recorded_at: None,
    }
  }

  pub fn at(mut self, recorded_at: DateTime<Utc>) -> Self {
    self.recorded_at = Some(recorded_at);
    self
  }

  pub fn validate(&self) -> Result<()> {
    check_price("sale_price", self.sale_price)?;
    check_price("normal_price", self.normal_price)?;
    if let Some(at) = self.recorded_at
      && !(0..=9999).contains(&at.year())
    {
      return Err(Error::TimestampOutOfRange(at));
    }
    Ok(())
  }
}

/// A persisted price sample. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
  pub id:           i64,
  pub item_id:      String,
  pub sale_price:   f64,
  pub normal_price: f64,
  pub recorded_at:  DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Timelike as _};

  use super::*;

  #[test]
  fn validate_rejects_years_past_9999() {
    let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
    let obs = NewPriceObservation::new("x", 1.0, 1.0).at(far);
    assert!(matches!(obs.validate(), Err(Error::TimestampOutOfRange(_))));

    let edge = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
    assert!(NewPriceObservation::new("x", 1.0, 1.0).at(edge).validate().is_ok());
  }

  #[test]
  fn truncation_keeps_milliseconds() {
    let dt = Utc
      .with_ymd_and_hms(2026, 3, 1, 22, 13, 20)
      .unwrap()
      .with_nanosecond(123_456_789)
      .unwrap();
    assert_eq!(truncate_recorded_at(dt).nanosecond(), 123_000_000);
  }
}

//! [`MemoryStore`] — an in-process [`WishlistStore`] backend.
//!
//! Mirrors the SQLite backend's observable behaviour (upsert policy, active
//! filter, write-time defaults, millisecond timestamps, price and timestamp
//! constraints) without any I/O. Handy for tests and for embedding the
//! service without a database file.

use std::{
  collections::BTreeMap,
  sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::Utc;

use crate::{
  Error, Result,
  item::TrackedItem,
  price::{NewPriceObservation, PriceObservation, truncate_recorded_at},
  store::WishlistStore,
};

#[derive(Debug, Default)]
struct State {
  /// Keyed by `(item_id, user_id)`.
  items:   BTreeMap<(String, String), TrackedItem>,
  history: Vec<PriceObservation>,
  last_id: i64,
}

/// Cloning is cheap; clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  state: Arc<RwLock<State>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  fn read(&self) -> RwLockReadGuard<'_, State> {
    self.state.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, State> {
    self.state.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Look up one item regardless of its active flag.
  pub fn get_item(&self, item_id: &str, user_id: &str) -> Option<TrackedItem> {
    self
      .read()
      .items
      .get(&(item_id.to_owned(), user_id.to_owned()))
      .cloned()
  }

  /// Full price history for `item_id`, oldest first.
  pub fn price_history(&self, item_id: &str) -> Vec<PriceObservation> {
    let mut rows: Vec<PriceObservation> = self
      .read()
      .history
      .iter()
      .filter(|o| o.item_id == item_id)
      .cloned()
      .collect();
    rows.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at).then(a.id.cmp(&b.id)));
    rows
  }
}

impl WishlistStore for MemoryStore {
  type Error = Error;

  async fn upsert_item(&self, item: TrackedItem) -> Result<()> {
    item.validate()?;

    let mut state = self.write();
    let key = (item.item_id.clone(), item.user_id.clone());
    state
      .items
      .entry(key)
      .and_modify(|existing| {
        existing.target_price = item.target_price;
        existing.is_active = item.is_active;
      })
      .or_insert(item);
    Ok(())
  }

  async fn list_active_items(&self, user_id: &str) -> Result<Vec<TrackedItem>> {
    Ok(
      self
        .read()
        .items
        .values()
        .filter(|i| i.user_id == user_id && i.is_active)
        .cloned()
        .collect(),
    )
  }

  async fn append_price_observation(
    &self,
    observation: NewPriceObservation,
  ) -> Result<()> {
    observation.validate()?;

    let mut state = self.write();
    state.last_id += 1;
    let row = PriceObservation {
      id:           state.last_id,
      item_id:      observation.item_id,
      sale_price:   observation.sale_price,
      normal_price: observation.normal_price,
      recorded_at:  truncate_recorded_at(observation.recorded_at.unwrap_or_else(Utc::now)),
    };
    state.history.push(row);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone as _, Timelike as _};

  use super::*;

  fn cyberpunk() -> TrackedItem {
    TrackedItem::new("1091500", "user_1", "Cyberpunk 2077", 29.99)
  }

  #[tokio::test]
  async fn upsert_keeps_title_and_updates_price_and_flag() {
    let s = MemoryStore::new();
    s.upsert_item(cyberpunk()).await.unwrap();

    let mut update = cyberpunk().deactivated();
    update.title = "Renamed".into();
    update.target_price = 19.99;
    s.upsert_item(update).await.unwrap();

    assert!(s.list_active_items("user_1").await.unwrap().is_empty());
    let stored = s.get_item("1091500", "user_1").unwrap();
    assert_eq!(stored.title, "Cyberpunk 2077");
    assert_eq!(stored.target_price, 19.99);
    assert!(!stored.is_active);
  }

  #[tokio::test]
  async fn list_filters_by_user_and_flag() {
    let s = MemoryStore::new();
    s.upsert_item(cyberpunk()).await.unwrap();
    s.upsert_item(TrackedItem::new("1091500", "user_2", "Cyberpunk 2077", 10.0))
      .await
      .unwrap();
    s.upsert_item(TrackedItem::new("292030", "user_1", "The Witcher 3", 9.99).deactivated())
      .await
      .unwrap();

    let items = s.list_active_items("user_1").await.unwrap();
    assert_eq!(items, vec![cyberpunk()]);
    assert!(s.list_active_items("nobody").await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn appends_assign_distinct_ids() {
    let s = MemoryStore::new();
    s.append_price_observation(NewPriceObservation::new("1091500", 19.99, 29.99))
      .await
      .unwrap();
    s.append_price_observation(NewPriceObservation::new("1091500", 19.99, 29.99))
      .await
      .unwrap();

    let history = s.price_history("1091500");
    assert_eq!(history.len(), 2);
    assert_ne!(history[0].id, history[1].id);
  }

  #[tokio::test]
  async fn rejects_invalid_writes() {
    let s = MemoryStore::new();
    let err = s
      .append_price_observation(NewPriceObservation::new("1", -1.0, 2.0))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NegativePrice { field: "sale_price", .. }));
    assert!(s.price_history("1").is_empty());

    let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
    let err = s
      .append_price_observation(NewPriceObservation::new("1", 1.0, 2.0).at(far))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::TimestampOutOfRange(_)));
    assert!(s.price_history("1").is_empty());
  }

  #[tokio::test]
  async fn recorded_at_is_kept_to_the_millisecond() {
    let s = MemoryStore::new();
    let at = Utc
      .with_ymd_and_hms(2026, 3, 1, 22, 13, 20)
      .unwrap()
      .with_nanosecond(123_456_789)
      .unwrap();
    s.append_price_observation(NewPriceObservation::new("1", 1.0, 2.0).at(at))
      .await
      .unwrap();

    let stored = s.price_history("1")[0].recorded_at;
    assert_eq!(stored, truncate_recorded_at(at));
    assert_eq!(stored.nanosecond(), 123_000_000);
  }

  #[tokio::test]
  async fn empty_title_is_rejected_even_for_an_existing_key() {
    let s = MemoryStore::new();
    s.upsert_item(cyberpunk()).await.unwrap();

    let mut update = cyberpunk();
    update.title = String::new();
    update.target_price = 1.0;
    assert!(matches!(s.upsert_item(update).await, Err(Error::EmptyTitle)));

    let stored = s.get_item("1091500", "user_1").unwrap();
    assert_eq!(stored.title, "Cyberpunk 2077");
    assert_eq!(stored.target_price, 29.99);
  }
}

//! Tracked item — one user's interest in one storefront item.
//!
//! Identity is the `(item_id, user_id)` pair. Items are never hard-deleted;
//! they drop out of the active set once `is_active` is cleared.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A user's wishlist entry for a storefront product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedItem {
  /// Storefront identifier (e.g. a Steam app id).
  pub item_id:      String,
  pub user_id:      String,
  /// Fixed at first insert; later upserts never change it.
  pub title:        String,
  pub target_price: f64,
  pub is_active:    bool,
}

impl TrackedItem {
  /// Build an active item.
  pub fn new(
    item_id: impl Into<String>,
    user_id: impl Into<String>,
    title: impl Into<String>,
    target_price: f64,
  ) -> Self {
    Self {
      item_id: item_id.into(),
      user_id: user_id.into(),
      title: title.into(),
      target_price,
      is_active: true,
    }
  }

  /// The same item with `is_active` cleared.
  pub fn deactivated(mut self) -> Self {
    self.is_active = false;
    self
  }

  /// Check the invariants the storage backends enforce on write.
  pub fn validate(&self) -> Result<()> {
    if self.title.is_empty() {
      return Err(Error::EmptyTitle);
    }
    check_price("target_price", self.target_price)
  }
}

/// Reject negative and NaN prices.
pub(crate) fn check_price(field: &'static str, value: f64) -> Result<()> {
  if value >= 0.0 {
    Ok(())
  } else {
    Err(Error::NegativePrice { field, value })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_items_are_active() {
    let item = TrackedItem::new("1091500", "user_1", "Cyberpunk 2077", 29.99);
    assert!(item.is_active);
    assert!(!item.deactivated().is_active);
  }

  #[test]
  fn validate_rejects_empty_title_and_negative_price() {
    let item = TrackedItem::new("1", "u", "", 1.0);
    assert!(matches!(item.validate(), Err(Error::EmptyTitle)));

    let item = TrackedItem::new("1", "u", "t", -0.01);
    assert!(matches!(
      item.validate(),
      Err(Error::NegativePrice { field: "target_price", .. })
    ));

    let item = TrackedItem::new("1", "u", "t", f64::NAN);
    assert!(item.validate().is_err());
  }
}

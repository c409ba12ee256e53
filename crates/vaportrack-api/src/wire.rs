//! Wire records for the `GetTrackedItems` call.
//!
//! Field names are camelCase on the wire. The item record deliberately
//! carries no `userId`: the caller already knows whose list it asked for.

use serde::{Deserialize, Serialize};
use vaportrack_core::item;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTrackedItemsRequest {
  /// A missing `userId` reads as `""`, which simply tracks nothing.
  #[serde(default)]
  pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItem {
  pub id:           String,
  pub title:        String,
  pub target_price: f64,
  pub is_active:    bool,
}

impl From<item::TrackedItem> for TrackedItem {
  fn from(item: item::TrackedItem) -> Self {
    Self {
      id:           item.item_id,
      title:        item.title,
      target_price: item.target_price,
      is_active:    item.is_active,
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTrackedItemsResponse {
  pub items: Vec<TrackedItem>,
}

//! The `WishlistStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `vaportrack-store-sqlite`, or [`MemoryStore`](crate::memory::MemoryStore)).
//! Higher layers (`vaportrack-api`, future price pollers) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{item::TrackedItem, price::NewPriceObservation};

/// Abstraction over a wishlist storage backend.
///
/// Backends never retry; every failure goes back to the immediate caller.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait WishlistStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `item`, or, if `(item_id, user_id)` already exists, update only
  /// its `target_price` and `is_active`. The stored title is left untouched.
  ///
  /// Must be a single atomic insert-or-update, never read-then-write.
  fn upsert_item(
    &self,
    item: TrackedItem,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All items for `user_id` with `is_active` set. Order is unspecified.
  /// An unknown user yields an empty `Vec`, not an error.
  fn list_active_items<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Vec<TrackedItem>, Self::Error>> + Send + 'a;

  /// Append one price sample. The referenced item is not checked for
  /// existence. `recorded_at` defaults to the write time.
  fn append_price_observation(
    &self,
    observation: NewPriceObservation,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

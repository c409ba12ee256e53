//! [`TrackerService`] — answers `GetTrackedItems` by delegating to a
//! [`WishlistStore`].

use std::{sync::Arc, time::Duration};

use vaportrack_core::store::WishlistStore;

use crate::{
  error::ApiError,
  wire::{GetTrackedItemsResponse, TrackedItem},
};

/// Thin request service over any [`WishlistStore`].
///
/// Holds no state of its own beyond the injected store; no caching, no
/// retries, no pagination.
pub struct TrackerService<S> {
  store:   Arc<S>,
  timeout: Option<Duration>,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for TrackerService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), timeout: self.timeout }
  }
}

impl<S> TrackerService<S>
where
  S: WishlistStore,
{
  pub fn new(store: Arc<S>) -> Self { Self { store, timeout: None } }

  /// Bound every store call by `timeout`.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Return the active wishlist of `user_id`.
  ///
  /// A store failure is returned as an error, never as an empty list.
  pub async fn get_tracked_items(
    &self,
    user_id: &str,
  ) -> Result<GetTrackedItemsResponse, ApiError> {
    tracing::info!(user_id, "GetTrackedItems");

    let fetch = self.store.list_active_items(user_id);
    let result = match self.timeout {
      Some(limit) => tokio::time::timeout(limit, fetch)
        .await
        .map_err(|_| ApiError::Timeout)?,
      None => fetch.await,
    };

    let items = result.map_err(|e| {
      tracing::error!(user_id, error = %e, "failed to fetch tracked items");
      ApiError::Store(Box::new(e))
    })?;

    Ok(GetTrackedItemsResponse {
      items: items.into_iter().map(TrackedItem::from).collect(),
    })
  }
}

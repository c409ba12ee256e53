//! JSON RPC surface for VaporTrack.
//!
//! Exposes an axum [`Router`] backed by any
//! [`vaportrack_core::store::WishlistStore`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `POST` | `/vaportrack.GameTracker/GetTrackedItems` | `{"userId":"user_1"}` |
//!
//! The response is `{"items":[{"id","title","targetPrice","isActive"}]}`.

pub mod error;
pub mod service;
pub mod wire;

use axum::{
  Json, Router,
  extract::{State, rejection::JsonRejection},
  routing::post,
};
use vaportrack_core::store::WishlistStore;

pub use error::ApiError;
pub use service::TrackerService;

use wire::{GetTrackedItemsRequest, GetTrackedItemsResponse};

pub const GET_TRACKED_ITEMS_PATH: &str = "/vaportrack.GameTracker/GetTrackedItems";

/// Build the RPC router for `service`.
///
/// The returned `Router<()>` can be nested or merged into any parent router
/// regardless of its own state type.
pub fn rpc_router<S>(service: TrackerService<S>) -> Router<()>
where
  S: WishlistStore + 'static,
{
  Router::new()
    .route(GET_TRACKED_ITEMS_PATH, post(get_tracked_items::<S>))
    .with_state(service)
}

/// `POST /vaportrack.GameTracker/GetTrackedItems`
async fn get_tracked_items<S>(
  State(service): State<TrackerService<S>>,
  payload: Result<Json<GetTrackedItemsRequest>, JsonRejection>,
) -> Result<Json<GetTrackedItemsResponse>, ApiError>
where
  S: WishlistStore + 'static,
{
  let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let response = service.get_tracked_items(&request.user_id).await?;
  Ok(Json(response))
}

use axum::Router;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub mod doc;
pub mod health;
pub mod items;
pub mod params;
pub mod wishlists;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(wishlists::router())
        .merge(items::router())
}

pub(crate) fn wishlist_location(id: i32) -> String {
    format!("/wishlists/{id}")
}

pub(crate) fn persisted_id(id: Option<i32>) -> AppResult<i32> {
    id.ok_or_else(|| AppError::Internal(anyhow::anyhow!("persisted record has no id")))
}

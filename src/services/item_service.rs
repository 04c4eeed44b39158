use sea_orm::TransactionTrait;
use serde_json::Value;

use crate::{
    codec,
    dto::items::ItemDescription,
    error::{AppError, AppResult},
    models::Item,
    routes::params::ItemQuery,
    state::AppState,
    store,
};

/// Create an item under an existing wishlist.
pub async fn create_item(state: &AppState, wishlist_id: i32, payload: Value) -> AppResult<Item> {
    let txn = state.orm.begin().await?;

    if store::wishlists::find_by_id_for_update(&txn, wishlist_id)
        .await?
        .is_none()
    {
        return Err(AppError::wishlist_not_found(wishlist_id));
    }
    let item = codec::item_from_value(&payload, wishlist_id)?;
    let saved = store::items::insert(&txn, &item).await?;

    txn.commit().await?;
    tracing::info!(item_id = saved.id, wishlist_id, "item created");
    Ok(saved.into())
}

pub async fn get_item(state: &AppState, item_id: i32) -> AppResult<Item> {
    tracing::debug!(item_id, "item lookup");
    store::items::find_by_id(&state.orm, item_id)
        .await?
        .map(Item::from)
        .ok_or_else(|| AppError::item_not_found(item_id))
}

pub async fn list_items(state: &AppState, query: ItemQuery) -> AppResult<Vec<Item>> {
    tracing::debug!(name = ?query.name, "item listing");
    let items = store::items::list(&state.orm, &query)
        .await?
        .into_iter()
        .map(Item::from)
        .collect();
    Ok(items)
}

/// Items owned by `wishlist_id`; empty when the wishlist has none or does not
/// exist.
pub async fn list_wishlist_items(state: &AppState, wishlist_id: i32) -> AppResult<Vec<Item>> {
    tracing::debug!(wishlist_id, "wishlist item listing");
    let items = store::items::list_by_wishlist(&state.orm, wishlist_id)
        .await?
        .into_iter()
        .map(Item::from)
        .collect();
    Ok(items)
}

/// Replace every field of an item. The owner becomes `wishlist_id` from the
/// path, whatever the body says, and must exist.
pub async fn update_item(
    state: &AppState,
    wishlist_id: i32,
    item_id: i32,
    payload: Value,
) -> AppResult<Item> {
    let txn = state.orm.begin().await?;

    let existing = store::items::find_by_id_for_update(&txn, item_id)
        .await?
        .ok_or_else(|| AppError::item_not_found(item_id))?;
    let replacement = codec::item_from_value(&payload, wishlist_id)?;
    if existing.wishlist_id != wishlist_id
        && store::wishlists::find_by_id(&txn, wishlist_id)
            .await?
            .is_none()
    {
        return Err(AppError::wishlist_not_found(wishlist_id));
    }
    let updated = store::items::update(&txn, existing, &replacement).await?;

    txn.commit().await?;
    tracing::info!(item_id, wishlist_id, "item updated");
    Ok(updated.into())
}

/// Delete an item through its owning wishlist. An item that exists under a
/// different wishlist is reported as not found.
pub async fn delete_item(state: &AppState, wishlist_id: i32, item_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    let existing = store::items::find_by_id_for_update(&txn, item_id)
        .await?
        .filter(|item| item.wishlist_id == wishlist_id)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Item with id '{item_id}' was not found in wishlist '{wishlist_id}'."
            ))
        })?;
    store::items::delete_by_id(&txn, existing.id).await?;

    txn.commit().await?;
    tracing::info!(item_id, wishlist_id, "item deleted");
    Ok(())
}

/// Only the item's existence is checked; `wishlist_id` is informational.
pub async fn read_description(
    state: &AppState,
    wishlist_id: i32,
    item_id: i32,
) -> AppResult<ItemDescription> {
    tracing::debug!(item_id, wishlist_id, "item description lookup");
    let item = store::items::find_by_id(&state.orm, item_id)
        .await?
        .ok_or_else(|| AppError::item_not_found(item_id))?;
    Ok(ItemDescription {
        id: item.id,
        description: item.description,
    })
}

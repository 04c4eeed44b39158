use sea_orm::TransactionTrait;
use serde_json::Value;

use crate::{
    codec,
    dto::wishlists::CreatedWishlist,
    error::{AppError, AppResult},
    models::{Item, Wishlist},
    routes::params::WishlistQuery,
    state::AppState,
    store,
};

/// Create a wishlist, plus the legacy inline `items` batch when present.
///
/// The wishlist and every batch item are written in one transaction; one
/// invalid item aborts the whole creation.
pub async fn create_wishlist(state: &AppState, payload: Value) -> AppResult<CreatedWishlist> {
    let wishlist = codec::wishlist_from_value(&payload)?;
    let batch = codec::nested_items(&payload)?;

    let txn = state.orm.begin().await?;
    let saved = store::wishlists::insert(&txn, &wishlist).await?;

    let items = match batch {
        Some(batch) => {
            tracing::warn!(
                wishlist_id = saved.id,
                count = batch.len(),
                "inline items on wishlist creation are deprecated, use POST /wishlists/{{id}}/items"
            );
            let mut created = Vec::with_capacity(batch.len());
            for entry in batch {
                let item = codec::item_from_value(entry, saved.id)?;
                created.push(Item::from(store::items::insert(&txn, &item).await?));
            }
            Some(created)
        }
        None => None,
    };

    txn.commit().await?;
    tracing::info!(wishlist_id = saved.id, customer_id = saved.customer_id, "wishlist created");

    Ok(CreatedWishlist {
        wishlist: saved.into(),
        items,
    })
}

pub async fn get_wishlist(state: &AppState, id: i32) -> AppResult<Wishlist> {
    tracing::debug!(wishlist_id = id, "wishlist lookup");
    store::wishlists::find_by_id(&state.orm, id)
        .await?
        .map(Wishlist::from)
        .ok_or_else(|| AppError::wishlist_not_found(id))
}

pub async fn list_wishlists(state: &AppState, query: WishlistQuery) -> AppResult<Vec<Wishlist>> {
    tracing::debug!(keyword = ?query.keyword(), customer_id = ?query.customer_id, "wishlist listing");
    let wishlists = store::wishlists::list(&state.orm, &query, state.keyword_match)
        .await?
        .into_iter()
        .map(Wishlist::from)
        .collect();
    Ok(wishlists)
}

/// Replace `customer_id` and `wishlist_name`; the stored row is untouched when
/// the payload does not validate.
pub async fn update_wishlist(state: &AppState, id: i32, payload: Value) -> AppResult<Wishlist> {
    let txn = state.orm.begin().await?;

    let existing = store::wishlists::find_by_id_for_update(&txn, id)
        .await?
        .ok_or_else(|| AppError::wishlist_not_found(id))?;
    let replacement = codec::wishlist_from_value(&payload)?;
    let updated = store::wishlists::update(&txn, existing, &replacement).await?;

    txn.commit().await?;
    tracing::info!(wishlist_id = id, "wishlist updated");
    Ok(updated.into())
}

/// Delete a wishlist and every item it owns. Deleting a missing wishlist is
/// not an error.
pub async fn delete_wishlist(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;

    if store::wishlists::find_by_id_for_update(&txn, id).await?.is_none() {
        tracing::debug!(wishlist_id = id, "wishlist already absent");
        return Ok(());
    }
    let items = store::items::delete_by_wishlist(&txn, id).await?;
    store::wishlists::delete_by_id(&txn, id).await?;

    txn.commit().await?;
    tracing::info!(wishlist_id = id, items, "wishlist deleted");
    Ok(())
}

/// Delete every item of a wishlist, keeping the wishlist itself.
pub async fn clear_wishlist(state: &AppState, id: i32) -> AppResult<u64> {
    let txn = state.orm.begin().await?;

    // Locks the parent so concurrent item creation waits for the clear.
    store::wishlists::find_by_id_for_update(&txn, id).await?;
    let removed = store::items::delete_by_wishlist(&txn, id).await?;

    txn.commit().await?;
    tracing::info!(wishlist_id = id, removed, "wishlist cleared");
    Ok(removed)
}

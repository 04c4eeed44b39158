use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::items::ItemRequest,
    models::{Item, Wishlist},
};

/// Documented shape of a wishlist create/update body. Decoding goes through
/// [`crate::codec`], which also accepts numeric strings for integer fields.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WishlistRequest {
    pub customer_id: i32,
    #[schema(max_length = 40)]
    pub wishlist_name: String,
    /// Deprecated: create items through `POST /wishlists/{id}/items`.
    #[schema(deprecated)]
    pub items: Option<Vec<ItemRequest>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedWishlist {
    #[serde(flatten)]
    pub wishlist: Wishlist,
    /// Present only when the request carried an `items` batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

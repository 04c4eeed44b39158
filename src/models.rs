use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{items, wishlists};

/// A named collection of items owned by a customer.
///
/// `id` stays `None` until the record has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Wishlist {
    pub id: Option<i32>,
    pub customer_id: i32,
    #[schema(max_length = 40)]
    pub wishlist_name: String,
}

/// A product reference owned by exactly one wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: Option<i32>,
    pub wishlist_id: i32,
    pub product_id: i32,
    #[schema(max_length = 63)]
    pub name: String,
    #[schema(max_length = 100)]
    pub description: Option<String>,
}

impl From<wishlists::Model> for Wishlist {
    fn from(model: wishlists::Model) -> Self {
        Self {
            id: Some(model.id),
            customer_id: model.customer_id,
            wishlist_name: model.wishlist_name,
        }
    }
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: Some(model.id),
            wishlist_id: model.wishlist_id,
            product_id: model.product_id,
            name: model.name,
            description: model.description,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Documented shape of an item create/update body. The owning wishlist is
/// always taken from the request path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemRequest {
    pub product_id: i32,
    #[schema(max_length = 63)]
    pub name: String,
    #[schema(max_length = 100)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ItemDescription {
    pub id: i32,
    pub description: Option<String>,
}

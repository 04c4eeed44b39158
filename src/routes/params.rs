use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WishlistQuery {
    pub keyword: Option<String>,
    pub customer_id: Option<i32>,
}

impl WishlistQuery {
    /// The keyword, ignoring empty values such as `?keyword=`.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ItemQuery {
    pub name: Option<String>,
}

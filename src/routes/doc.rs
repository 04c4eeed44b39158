use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        items::{ItemDescription, ItemRequest},
        wishlists::{CreatedWishlist, WishlistRequest},
    },
    models::{Item, Wishlist},
    response::ErrorResponse,
    routes::{health, items, params, wishlists},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Wishlist REST API Service"),
    paths(
        health::index,
        health::health_check,
        wishlists::create_wishlist,
        wishlists::list_wishlists,
        wishlists::get_wishlist,
        wishlists::update_wishlist,
        wishlists::delete_wishlist,
        wishlists::clear_wishlist,
        items::create_item,
        items::list_wishlist_items,
        items::list_items,
        items::get_item,
        items::update_item,
        items::delete_item,
        items::read_description
    ),
    components(
        schemas(
            Wishlist,
            Item,
            WishlistRequest,
            ItemRequest,
            CreatedWishlist,
            ItemDescription,
            ErrorResponse,
            health::ServiceInfo,
            health::HealthData,
            params::WishlistQuery,
            params::ItemQuery
        )
    ),
    tags(
        (name = "Health", description = "Service index and health check"),
        (name = "Wishlists", description = "Wishlist endpoints"),
        (name = "Items", description = "Item endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

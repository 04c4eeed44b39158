use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, StatusCode, header},
    routing::{get, put},
};

use crate::{
    dto::wishlists::{CreatedWishlist, WishlistRequest},
    error::AppResult,
    middleware::{
        extract::{PathParams, QueryParams},
        json::JsonBody,
    },
    models::Wishlist,
    response::ErrorResponse,
    routes::{params::WishlistQuery, persisted_id, wishlist_location},
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wishlists", get(list_wishlists).post(create_wishlist))
        .route(
            "/wishlists/{id}",
            get(get_wishlist).put(update_wishlist).delete(delete_wishlist),
        )
        .route("/wishlists/{id}/clear", put(clear_wishlist))
}

#[utoipa::path(
    post,
    path = "/wishlists",
    request_body = WishlistRequest,
    responses(
        (status = 201, description = "Wishlist created", body = CreatedWishlist,
            headers(("location" = String, description = "URL of the new wishlist"))),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "Wishlists"
)]
pub async fn create_wishlist(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<CreatedWishlist>)> {
    let created = wishlist_service::create_wishlist(&state, payload).await?;
    let location = wishlist_location(persisted_id(created.wishlist.id)?);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    get,
    path = "/wishlists",
    params(
        ("keyword" = Option<String>, Query, description = "Match against wishlist_name"),
        ("customer_id" = Option<i32>, Query, description = "Only wishlists of this customer")
    ),
    responses(
        (status = 200, description = "List wishlists", body = Vec<Wishlist>)
    ),
    tag = "Wishlists"
)]
pub async fn list_wishlists(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WishlistQuery>,
) -> AppResult<Json<Vec<Wishlist>>> {
    let wishlists = wishlist_service::list_wishlists(&state, query).await?;
    Ok(Json(wishlists))
}

#[utoipa::path(
    get,
    path = "/wishlists/{id}",
    params(
        ("id" = i32, Path, description = "Wishlist ID")
    ),
    responses(
        (status = 200, description = "Get wishlist", body = Wishlist),
        (status = 404, description = "Wishlist not found", body = ErrorResponse)
    ),
    tag = "Wishlists"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = wishlist_service::get_wishlist(&state, id).await?;
    Ok(Json(wishlist))
}

#[utoipa::path(
    put,
    path = "/wishlists/{id}",
    params(
        ("id" = i32, Path, description = "Wishlist ID")
    ),
    request_body = WishlistRequest,
    responses(
        (status = 200, description = "Updated wishlist", body = Wishlist),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Wishlist not found", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "Wishlists"
)]
pub async fn update_wishlist(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<Wishlist>> {
    let wishlist = wishlist_service::update_wishlist(&state, id, payload).await?;
    Ok(Json(wishlist))
}

#[utoipa::path(
    delete,
    path = "/wishlists/{id}",
    params(
        ("id" = i32, Path, description = "Wishlist ID")
    ),
    responses(
        (status = 204, description = "Wishlist and its items deleted, or already absent")
    ),
    tag = "Wishlists"
)]
pub async fn delete_wishlist(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    wishlist_service::delete_wishlist(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/wishlists/{id}/clear",
    params(
        ("id" = i32, Path, description = "Wishlist ID")
    ),
    responses(
        (status = 204, description = "All items of the wishlist deleted")
    ),
    tag = "Wishlists"
)]
pub async fn clear_wishlist(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<StatusCode> {
    wishlist_service::clear_wishlist(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

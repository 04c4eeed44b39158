use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, StatusCode, header},
    routing::{get, put},
};

use crate::{
    dto::items::{ItemDescription, ItemRequest},
    error::AppResult,
    middleware::{
        extract::{PathParams, QueryParams},
        json::JsonBody,
    },
    models::Item,
    response::ErrorResponse,
    routes::{params::ItemQuery, wishlist_location},
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlists/{id}/items",
            get(list_wishlist_items).post(create_item),
        )
        .route(
            "/wishlists/{id}/items/{item_id}",
            put(update_item).delete(delete_item),
        )
        .route(
            "/wishlists/{id}/items/{item_id}/description",
            get(read_description),
        )
        .route("/items", get(list_items))
        .route("/items/{item_id}", get(get_item))
}

#[utoipa::path(
    post,
    path = "/wishlists/{id}/items",
    params(
        ("id" = i32, Path, description = "Owning wishlist ID")
    ),
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item,
            headers(("location" = String, description = "URL of the owning wishlist"))),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Wishlist not found", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
    JsonBody(payload): JsonBody,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Item>)> {
    let item = item_service::create_item(&state, id, payload).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, wishlist_location(id))],
        Json(item),
    ))
}

#[utoipa::path(
    get,
    path = "/wishlists/{id}/items",
    params(
        ("id" = i32, Path, description = "Owning wishlist ID")
    ),
    responses(
        (status = 200, description = "Items of the wishlist", body = Vec<Item>)
    ),
    tag = "Items"
)]
pub async fn list_wishlist_items(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_wishlist_items(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/items",
    params(
        ("name" = Option<String>, Query, description = "Only items with exactly this name")
    ),
    responses(
        (status = 200, description = "List items", body = Vec<Item>)
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ItemQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_items(&state, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    PathParams(item_id): PathParams<i32>,
) -> AppResult<Json<Item>> {
    let item = item_service::get_item(&state, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/wishlists/{id}/items/{item_id}",
    params(
        ("id" = i32, Path, description = "Owning wishlist ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Item or wishlist not found", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    PathParams((id, item_id)): PathParams<(i32, i32)>,
    JsonBody(payload): JsonBody,
) -> AppResult<Json<Item>> {
    let item = item_service::update_item(&state, id, item_id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/wishlists/{id}/items/{item_id}",
    params(
        ("id" = i32, Path, description = "Owning wishlist ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found in this wishlist", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PathParams((id, item_id)): PathParams<(i32, i32)>,
) -> AppResult<StatusCode> {
    item_service::delete_item(&state, id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/wishlists/{id}/items/{item_id}/description",
    params(
        ("id" = i32, Path, description = "Owning wishlist ID"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item description", body = ItemDescription),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn read_description(
    State(state): State<AppState>,
    PathParams((id, item_id)): PathParams<(i32, i32)>,
) -> AppResult<Json<ItemDescription>> {
    let description = item_service::read_description(&state, id, item_id).await?;
    Ok(Json(description))
}

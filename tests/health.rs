mod common;

use axum::{extract::State, http::StatusCode};
use utoipa::OpenApi;
use wishlist_api::{
    config::KeywordMatch,
    routes::{doc::ApiDoc, health::health_check},
};

use common::TestApp;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let state = common::setup_state(KeywordMatch::Contains).await?;

    let (status, body) = health_check(State(state)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.0.status, "ok");
    assert_eq!(body.0.database, "ok");
    Ok(())
}

#[tokio::test]
async fn index_names_the_service() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let resp = app.get("/").await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["name"], "Wishlist REST API Service");
    assert_eq!(resp.body["version"], env!("CARGO_PKG_VERSION"));

    let health = app.get("/health").await?;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    Ok(())
}

#[test]
fn openapi_lists_every_route() {
    let doc = ApiDoc::openapi();
    for path in [
        "/",
        "/health",
        "/wishlists",
        "/wishlists/{id}",
        "/wishlists/{id}/clear",
        "/wishlists/{id}/items",
        "/wishlists/{id}/items/{item_id}",
        "/wishlists/{id}/items/{item_id}/description",
        "/items",
        "/items/{item_id}",
    ] {
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}

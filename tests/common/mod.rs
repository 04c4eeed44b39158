// Common test utilities for integration tests
#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wishlist_api::{
    app::build_app,
    config::KeywordMatch,
    db::{create_orm_conn, init_schema},
    state::AppState,
};

/// Fresh in-memory database with the schema applied.
pub async fn setup_state(keyword_match: KeywordMatch) -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    init_schema(&orm).await?;
    Ok(AppState::new(orm, keyword_match))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("response body has an integer id")
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_keyword_match(KeywordMatch::Contains).await
    }

    pub async fn with_keyword_match(keyword_match: KeywordMatch) -> anyhow::Result<Self> {
        let state = setup_state(keyword_match).await?;
        let router = build_app(state.clone());
        Ok(Self { state, router })
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.without_body(Method::GET, uri).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<TestResponse> {
        self.without_body(Method::DELETE, uri).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.with_json(Method::POST, uri, body).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> anyhow::Result<TestResponse> {
        self.with_json(Method::PUT, uri, body).await
    }

    pub async fn without_body(&self, method: Method, uri: &str) -> anyhow::Result<TestResponse> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub async fn with_json(
        &self,
        method: Method,
        uri: &str,
        body: &Value,
    ) -> anyhow::Result<TestResponse> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?;
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> anyhow::Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn create_wishlist(&self, customer_id: i32, name: &str) -> anyhow::Result<i64> {
        let resp = self
            .post_json(
                "/wishlists",
                &json!({ "customer_id": customer_id, "wishlist_name": name }),
            )
            .await?;
        assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.body);
        Ok(resp.id())
    }

    pub async fn create_item(
        &self,
        wishlist_id: i64,
        product_id: i32,
        name: &str,
        description: &str,
    ) -> anyhow::Result<i64> {
        let resp = self
            .post_json(
                &format!("/wishlists/{wishlist_id}/items"),
                &json!({ "product_id": product_id, "name": name, "description": description }),
            )
            .await?;
        assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.body);
        Ok(resp.id())
    }

    pub async fn count(&self, uri: &str) -> anyhow::Result<usize> {
        let resp = self.get(uri).await?;
        assert_eq!(resp.status, StatusCode::OK);
        Ok(resp.body.as_array().map(Vec::len).unwrap_or_default())
    }
}

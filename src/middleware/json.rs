use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
};
use serde_json::Value;

use crate::error::AppError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON request body, left undecoded for [`crate::codec`].
///
/// Rejects with 415 unless the request declares `Content-Type:
/// application/json` (parameters such as `charset` are allowed), with 413 when
/// the body runs over the request size limit, and with 400 when it is not valid
/// JSON.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if !is_json(&declared) {
            tracing::info!(content_type = %declared, "invalid Content-Type");
            return Err(AppError::UnsupportedMediaType(JSON_CONTENT_TYPE));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::BadRequest(rejection.body_text()),
            })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::BadRequest(format!("Malformed JSON body: {err}")))?;

        Ok(Self(value))
    }
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{codec::ValidationError, response::ErrorResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Content-Type must be {0}")]
    UnsupportedMediaType(&'static str),

    #[error("The method is not allowed for the requested URL.")]
    MethodNotAllowed,

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn wishlist_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Wishlist with id '{id}' was not found."))
    }

    pub fn item_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Item with id '{id}' was not found."))
    }

    pub fn url_not_found(path: &str) -> Self {
        AppError::NotFound(format!("The requested URL '{path}' was not found."))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::OrmError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "unhandled error");
        } else {
            tracing::info!(status = %status, "{self}");
        }

        let body = ErrorResponse::new(status, self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

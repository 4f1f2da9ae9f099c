//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`heroes_core::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on database calls directly.
//! Extractor rejections are folded into [`heroes_core::Error::Validation`] so
//! every malformed input answers 422.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: heroes_core::Error,
}

impl AppError {
    pub fn new(inner: heroes_core::Error) -> Self {
        Self { inner }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<heroes_core::Error> for AppError {
    fn from(e: heroes_core::Error) -> Self {
        Self::new(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(heroes_core::Error::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(heroes_core::Error::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(heroes_core::Error::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full but never echoed to clients.
        let detail = if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
            "Internal Server Error".to_string()
        } else {
            self.inner.to_string()
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

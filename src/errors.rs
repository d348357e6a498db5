use crate::models::ErrorResponse;
use axum::{http::StatusCode, Json};

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const GENERATION_FAILED: &str = "generation failed";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: METHOD_NOT_ALLOWED.to_string(),
        }
    }

    /// The provider's own error is logged by the caller and never reaches the client.
    pub fn generation_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERATION_FAILED.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

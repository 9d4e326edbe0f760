use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Internal(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Unprocessable(msg)
            | AppError::MethodNotAllowed(msg) => msg,
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), reason = %message, "request failed");
        } else {
            warn!(status = status.as_u16(), reason = %message, "request rejected");
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

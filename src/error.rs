use crate::models::api::ApiResponse;
use crate::validation::ValidationError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid form: {errors}")]
    InvalidForm { errors: ValidationError },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation { ref message } => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::bad_request(message)),
            )
                .into_response(),
            AppError::InvalidForm { errors } => {
                let details = errors.to_error_details();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::invalid_form(json!({ "errors": errors }), details)),
                )
                    .into_response()
            }
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::internal_error("Configuration error")),
                )
                    .into_response()
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::internal_error(message)),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(errors: ValidationError) -> Self {
        Self::InvalidForm { errors }
    }
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

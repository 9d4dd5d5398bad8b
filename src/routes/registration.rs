use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::{
    AppState,
    error::AppError,
    models::{ApiResponse, RegistrationData, RegistrationForm},
    validation::{self, ValidatedJson, Validation, ValidationError},
};

/// 空白注册表单
pub async fn registration_form() -> impl IntoResponse {
    Json(ApiResponse::success(json!({ "errors": {} }), "Registration form"))
}

/// 提交注册表单：失败时回显错误，成功时重定向
pub async fn register(
    State(state): State<Arc<AppState>>,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(_) => return AppError::validation("Invalid form body").into_response(),
    };

    respond(&state, validation::validate(&form))
}

pub async fn register_async(
    State(state): State<Arc<AppState>>,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(_) => return AppError::validation("Invalid form body").into_response(),
    };

    let output = validation::validate_async(&form).await;
    respond(&state, output)
}

pub async fn register_json(
    ValidatedJson(data): ValidatedJson<RegistrationForm>,
) -> impl IntoResponse {
    info!(registration = ?data, "Registration accepted");
    Json(ApiResponse::success(
        json!({ "email": data.email, "invite": data.invite }),
        "Registration accepted",
    ))
}

fn respond(state: &AppState, output: Validation<ValidationError, RegistrationData>) -> Response {
    output.cata(
        |errors| AppError::InvalidForm { errors }.into_response(),
        |data| {
            info!(registration = ?data, "Registration accepted");
            Redirect::to(&state.config.success_redirect).into_response()
        },
    )
}

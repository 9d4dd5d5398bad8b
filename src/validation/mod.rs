pub mod combinator;
pub mod error;
pub mod registration;

use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json,
};
use serde::de::DeserializeOwned;

pub use self::combinator::{Semigroup, Validation};
pub use self::error::ValidationError;
pub use self::registration::{validate, validate_async, validate_invite_and_email, validate_password};

use crate::{error::AppError, models::RegistrationForm};

/// 可验证的原始输入
pub trait ValidateForm {
    type Output;

    fn validate_form(&self) -> Validation<ValidationError, Self::Output>;
}

impl ValidateForm for RegistrationForm {
    type Output = crate::models::RegistrationData;

    fn validate_form(&self) -> Validation<ValidationError, Self::Output> {
        validate(self)
    }
}

/// 验证的 JSON 提取器，产出验证后的数据
pub struct ValidatedJson<T: ValidateForm>(pub T::Output);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateForm,
    T::Output: Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid JSON format"))?;

        let data = value.validate_form().into_result()?;

        Ok(ValidatedJson(data))
    }
}

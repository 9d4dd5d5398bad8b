use serde::Serialize;

// 统一API响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

// 便捷构造函数
impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// 表单验证失败：`data` 携带回显给表单的内容
    pub fn invalid_form(data: T, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code: 422,
            message: "Validation failed".to_string(),
            data: Some(data),
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            success: false,
            code: 400,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "BAD_REQUEST".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            success: false,
            code: 500,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "INTERNAL_ERROR".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::utils::error_codes;

/// 统一的 API 响应结构，`code` 为 0 表示成功
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResult<T: Serialize> {
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            error_message: None,
            content: Some(data),
        }
    }

    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            error_message: Some(message.into()),
            content: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == error_codes::SUCCESS
    }
}

/// 成功响应返回 200；错误响应的 HTTP 状态由 `AppError` 决定
impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_omits_error_message() {
        let result = ApiResult::success("sess-1");
        assert!(result.is_success());

        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body, serde_json::json!({ "code": 0, "content": "sess-1" }));
    }

    #[test]
    fn test_error_body_omits_content() {
        let result = ApiResult::<()>::error(error_codes::SESSION_NOT_FOUND, "会话不存在");
        assert!(!result.is_success());

        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "code": error_codes::SESSION_NOT_FOUND, "error_message": "会话不存在" })
        );
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::result::ApiResult;
use crate::utils::error_codes;

/// 缓存存储错误，均视为存储不可用，直接向上传递，不做重试
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("cache store unavailable: {0}")]
    Unavailable(String),
}

/// 会话操作错误
///
/// 会话不存在或已过期不属于错误，由 `Ok(None)` 表示。
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to serialize session {session_id}: {source}")]
    Serialize {
        session_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// 缓存中的数据不符合会话格式：数据损坏或版本不兼容
    #[error("corrupt session entry at {key}: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    InvalidRequest(String),
    StoreUnavailable,
    CorruptSession,
    InternalServerError,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        tracing::error!(error = %err, "session operation failed");
        match err {
            SessionError::Store(_) => AppError::StoreUnavailable,
            SessionError::Deserialize { .. } => AppError::CorruptSession,
            SessionError::Serialize { .. } => AppError::InternalServerError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error_message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                error_codes::SESSION_NOT_FOUND,
                "会话不存在或已过期，请重新登录".to_string(),
            ),
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, msg)
            }
            AppError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::STORE_UNAVAILABLE,
                "会话存储不可用".to_string(),
            ),
            AppError::CorruptSession => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::CORRUPT_SESSION,
                "会话数据损坏".to_string(),
            ),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "内部服务器错误".to_string(),
            ),
        };

        let body = Json(ApiResult::<()>::error(code, error_message));

        (status, body).into_response()
    }
}

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::AppError, result::ApiResult};

use super::model::{
    CreateSessionRequest, CreateTokenSessionRequest, DeleteSessionResponse, SessionResponse,
};

fn require_user_id(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidRequest("user_id 不能为空".to_string()));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<ApiResult<SessionResponse>, AppError> {
    require_user_id(&req.user_id)?;

    let session = state.sessions.create_session(&req.user_id, req.data).await?;
    Ok(ApiResult::success(session.into()))
}

#[axum::debug_handler]
pub async fn create_session_from_token(
    State(state): State<AppState>,
    Json(req): Json<CreateTokenSessionRequest>,
) -> Result<ApiResult<SessionResponse>, AppError> {
    require_user_id(&req.user_id)?;

    let session = state
        .sessions
        .create_session_from_token(&req.user_id, &req.access_token, &req.refresh_token)
        .await?;
    Ok(ApiResult::success(session.into()))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResult<SessionResponse>, AppError> {
    match state.sessions.get_session(&session_id).await? {
        Some(session) => Ok(ApiResult::success(session.into())),
        None => Err(AppError::Unauthorized),
    }
}

#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<ApiResult<DeleteSessionResponse>, AppError> {
    state.sessions.delete_session(&session_id).await?;
    Ok(ApiResult::success(DeleteSessionResponse { session_id }))
}

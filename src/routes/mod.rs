use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub mod session;

/// 会话接口路由，挂载在 `base_uri` 下
pub fn router(base_uri: &str) -> Router<AppState> {
    let session_routes = Router::new()
        .route("/sessions", post(session::create_session))
        .route("/sessions/token", post(session::create_session_from_token))
        .route(
            "/sessions/{session_id}",
            get(session::get_session).delete(session::delete_session),
        );

    if base_uri.is_empty() || base_uri == "/" {
        session_routes
    } else {
        Router::new().nest(base_uri, session_routes)
    }
}

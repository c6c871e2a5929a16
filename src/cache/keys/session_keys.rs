/// 会话缓存键的路径段
const SESSION_KEY_SEGMENT: &str = "auth/session";

/// 生成会话缓存键，格式为 `<namespace>/auth/session/<session_id>`
pub fn session_key(namespace: &str, session_id: &str) -> String {
    format!("{}/{}/{}", namespace, SESSION_KEY_SEGMENT, session_id)
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::Session;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTokenSessionRequest {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub user_id: String,
    pub data: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub ttl_secs: u64,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            user_id: session.user_id().to_string(),
            created_at: session.created_at(),
            expires_at: session.expires_at(),
            ttl_secs: session.ttl().as_secs(),
            data: session.data().clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteSessionResponse {
    pub session_id: String,
}

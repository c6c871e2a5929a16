use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::keys::session_key;
use crate::cache::models::session::{DATA_KEY_ACCESS_TOKEN, DATA_KEY_REFRESH_TOKEN, Session};
use crate::cache::store::CacheStore;
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::utils::{Clock, IdGenerator, SystemClock, UuidV7Generator};

/// 会话管理
///
/// 本身不持有会话状态，也不加锁；并发安全依赖缓存存储对单键读写的原子性。
/// 存储错误直接返回给调用方，不做重试。
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn CacheStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
}

impl SessionManager {
    pub fn new(store: Arc<dyn CacheStore>, config: SessionConfig) -> Self {
        Self {
            store,
            ids: Arc::new(UuidV7Generator),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// 会话缓存键
    pub fn cache_key(&self, session_id: &str) -> String {
        session_key(&self.config.namespace, session_id)
    }

    /// 获取会话
    ///
    /// 不存在或已过期都返回 `Ok(None)`；缓存内容无法解析时返回 `SessionError::Deserialize`。
    pub async fn get_session(&self, session_id: &str) -> SessionResult<Option<Session>> {
        let key = self.cache_key(session_id);

        let Some(bytes) = self.store.get(&key).await? else {
            tracing::debug!(session_id, "session cache miss");
            return Ok(None);
        };

        let session: Session = serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(key = %key, error = %source, "corrupt session entry");
            SessionError::Deserialize {
                key: key.clone(),
                source,
            }
        })?;

        if !session.is_valid_at(self.clock.now()) {
            tracing::debug!(session_id, "session expired");
            if self.config.delete_expired_on_read {
                self.store.delete(&key).await?;
            }
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// 创建会话并写入缓存
    ///
    /// 写入不检查 ID 冲突，ID 由生成器保证唯一。
    pub async fn create_session(
        &self,
        user_id: &str,
        data: HashMap<String, String>,
    ) -> SessionResult<Session> {
        let session = Session::new(
            self.ids.new_id(),
            user_id,
            data,
            self.clock.now(),
            self.config.ttl,
        );

        let json = serde_json::to_vec(&session).map_err(|source| SessionError::Serialize {
            session_id: session.id().to_string(),
            source,
        })?;

        let expire = self.config.native_expiry.then_some(self.config.ttl);
        self.store
            .set(&self.cache_key(session.id()), json, expire)
            .await?;

        tracing::info!(session_id = session.id(), user_id, "session created");
        Ok(session)
    }

    /// 以访问令牌和刷新令牌创建会话
    pub async fn create_session_from_token(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> SessionResult<Session> {
        let data = HashMap::from([
            (DATA_KEY_ACCESS_TOKEN.to_string(), access_token.to_string()),
            (DATA_KEY_REFRESH_TOKEN.to_string(), refresh_token.to_string()),
        ]);
        self.create_session(user_id, data).await
    }

    /// 删除会话，会话不存在时不报错
    pub async fn delete_session(&self, session_id: &str) -> SessionResult<()> {
        self.store.delete(&self.cache_key(session_id)).await?;

        tracing::info!(session_id, "session deleted");
        Ok(())
    }
}

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// 默认会话缓存命名空间
pub const DEFAULT_SESSION_NAMESPACE: &str = "dify.ai";

/// 默认会话有效期
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(5 * 60);

/// 会话管理配置
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 缓存键命名空间
    pub namespace: String,

    /// 所有新建会话使用的有效期
    pub ttl: Duration,

    /// 写入时是否让缓存存储按 ttl 自行过期
    pub native_expiry: bool,

    /// 读取到已过期的会话时是否立即删除，否则等待存储自行淘汰
    pub delete_expired_on_read: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_SESSION_NAMESPACE.to_string(),
            ttl: DEFAULT_SESSION_TTL,
            native_expiry: true,
            delete_expired_on_read: false,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_native_expiry(mut self, enabled: bool) -> Self {
        self.native_expiry = enabled;
        self
    }

    pub fn with_delete_expired_on_read(mut self, enabled: bool) -> Self {
        self.delete_expired_on_read = enabled;
        self
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub redis_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub session_namespace: String,
    pub session_ttl_secs: u64,
    pub session_native_expiry: bool,
    pub session_delete_expired_on_read: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_vars(|name| env::var(name).ok())
    }

    /// 从任意变量来源加载配置，可选项解析失败时使用默认值
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_url = lookup("REDIS_URL").ok_or(ConfigError::Missing("REDIS_URL"))?;

        let session_ttl_secs = lookup("SESSION_TTL")
            .and_then(|v| v.trim().trim_end_matches('s').parse::<u64>().ok())
            // 0 会让新建会话立即失效，按无效值处理
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SESSION_TTL.as_secs());

        Ok(Config {
            redis_url,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_base_uri: lookup("API_BASE_URI").unwrap_or_else(|| "/api".into()),
            session_namespace: lookup("SESSION_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_SESSION_NAMESPACE.into()),
            session_ttl_secs,
            session_native_expiry: lookup("SESSION_NATIVE_EXPIRY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            session_delete_expired_on_read: lookup("SESSION_DELETE_EXPIRED_ON_READ")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        })
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_namespace(self.session_namespace.clone())
            .with_ttl(self.session_ttl())
            .with_native_expiry(self.session_native_expiry)
            .with_delete_expired_on_read(self.session_delete_expired_on_read)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("REDIS_URL", "redis://127.0.0.1/")]).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.api_base_uri, "/api");

        let session = config.session_config();
        assert_eq!(session.namespace, DEFAULT_SESSION_NAMESPACE);
        assert_eq!(session.ttl, Duration::from_secs(300));
        assert!(session.native_expiry);
        assert!(!session.delete_expired_on_read);
    }

    #[test]
    fn test_missing_redis_url() {
        assert!(matches!(
            load(&[("SERVER_PORT", "8080")]),
            Err(ConfigError::Missing("REDIS_URL"))
        ));
    }

    #[test]
    fn test_session_overrides() {
        let config = load(&[
            ("REDIS_URL", "redis://cache:6379/"),
            ("SESSION_NAMESPACE", "tenant-a"),
            ("SESSION_TTL", "900s"),
            ("SESSION_NATIVE_EXPIRY", "false"),
            ("SESSION_DELETE_EXPIRED_ON_READ", "yes"),
        ])
        .unwrap();

        let session = config.session_config();
        assert_eq!(session.namespace, "tenant-a");
        assert_eq!(session.ttl, Duration::from_secs(900));
        assert!(!session.native_expiry);
        assert!(session.delete_expired_on_read);
    }

    #[test]
    fn test_invalid_optional_values_fall_back() {
        let config = load(&[
            ("REDIS_URL", "redis://127.0.0.1/"),
            ("SERVER_PORT", "not-a-port"),
            ("SESSION_TTL", "5m"),
            ("SESSION_NATIVE_EXPIRY", "maybe"),
        ])
        .unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.session_ttl(), DEFAULT_SESSION_TTL);
        assert!(config.session_native_expiry);
    }

    #[test]
    fn test_zero_session_ttl_falls_back() {
        for ttl in ["0", "0s", " 0 "] {
            let config = load(&[("REDIS_URL", "redis://127.0.0.1/"), ("SESSION_TTL", ttl)]).unwrap();
            assert_eq!(config.session_ttl(), DEFAULT_SESSION_TTL);
        }
    }
}

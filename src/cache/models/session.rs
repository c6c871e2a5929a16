use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// 会话数据中存放访问令牌的键
pub const DATA_KEY_ACCESS_TOKEN: &str = "access_token";

/// 会话数据中存放刷新令牌的键
pub const DATA_KEY_REFRESH_TOKEN: &str = "refresh_token";

/// 会话缓存数据模型
///
/// 创建后不可变：字段只能通过构造函数设置，对外只提供只读访问。
/// 序列化后的字段名即缓存中的存储格式，修改时需保持兼容。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    data: HashMap<String, String>,
    #[serde(deserialize_with = "deserialize_created_at")]
    created_at: DateTime<Utc>,
    ttl: i64, // 纳秒
    user_id: String,
}

/// 读取创建时间：兼容 RFC 3339 和不带时区的时间戳，后者按 UTC 处理
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(created_at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(created_at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

impl Session {
    /// 构造会话，`created_at` 为创建时刻
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        data: HashMap<String, String>,
        created_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            data,
            created_at,
            ttl: i64::try_from(ttl.as_nanos()).unwrap_or(i64::MAX),
            user_id: user_id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 有效期，负值按零处理
    pub fn ttl(&self) -> Duration {
        Duration::from_nanos(u64::try_from(self.ttl).unwrap_or(0))
    }

    /// 过期时刻；超出可表示的时间范围时返回 None
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .checked_add_signed(chrono::Duration::nanoseconds(self.ttl))
    }

    /// 判断会话在给定时刻是否有效（`now < created_at + ttl`）
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now < expires_at,
            // 过期时刻溢出，说明 ttl 远超任何现实时间
            None => self.ttl > 0,
        }
    }

    /// 判断会话当前是否有效
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// 获取访问令牌，不存在时返回空字符串
    pub fn get_access_token(&self) -> &str {
        self.data
            .get(DATA_KEY_ACCESS_TOKEN)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 获取刷新令牌，不存在时返回空字符串
    pub fn get_refresh_token(&self) -> &str {
        self.data
            .get(DATA_KEY_REFRESH_TOKEN)
            .map(String::as_str)
            .unwrap_or("")
    }
}

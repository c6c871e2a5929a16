//! 缓存存储
//! 会话管理只依赖单键的 get/set/delete，具体后端通过 `CacheStore` 注入

use std::time::Duration;

use async_trait::async_trait;

pub use crate::error::StoreError;

pub mod memory;
pub mod redis_store;

pub use self::memory::MemoryStore;
pub use self::redis_store::RedisStore;

/// 扁平键空间的键值存储
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 读取键值，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// 写入键值，`expire` 为 Some 时由存储自行过期淘汰
    async fn set(&self, key: &str, value: Vec<u8>, expire: Option<Duration>)
    -> Result<(), StoreError>;

    /// 删除键，键不存在时不报错
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

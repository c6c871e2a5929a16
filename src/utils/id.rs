use uuid::Uuid;

/// 会话 ID 生成器，生成的 ID 必须全局唯一且按时间有序
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// 基于 UUIDv7 的 ID 生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn new_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}

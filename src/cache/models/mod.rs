/// 缓存数据模型
/// 定义缓存数据的结构体

// 会话缓存模型
pub mod session;

// 重新导出常用类型
pub use session::{DATA_KEY_ACCESS_TOKEN, DATA_KEY_REFRESH_TOKEN, Session};

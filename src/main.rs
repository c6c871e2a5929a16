use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use auth_session::{
    AppState,
    cache::{RedisStore, SessionManager},
    config::Config,
    routes,
};
#[cfg(debug_assertions)]
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 设置 Redis 会话存储
    let store = RedisStore::open(&config.redis_url).expect("Failed to create Redis client");
    let session_config = config.session_config();
    tracing::info!(
        namespace = %session_config.namespace,
        ttl_secs = session_config.ttl.as_secs(),
        native_expiry = session_config.native_expiry,
        "Session store configured"
    );

    let state = AppState {
        config: config.clone(),
        sessions: SessionManager::new(Arc::new(store), session_config),
    };

    let router = routes::router(&config.api_base_uri).layer(TraceLayer::new_for_http());

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(CorsLayer::permissive())
    };

    let app = router.with_state(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}

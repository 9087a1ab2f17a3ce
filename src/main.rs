//! Gruha Interior Design Assistant - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，提供静态页面、助手聊天、
//! 房间图片分析和室内设计图片搜索。

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;
mod unsplash;
mod utils;

use api::create_api_routes;
use config::AppConfig;
use state::create_shared_state;

/// 在 Windows 上设置控制台代码页为 UTF-8
#[cfg(windows)]
fn setup_console_encoding() {
    unsafe {
        extern "system" {
            fn SetConsoleOutputCP(code_page: u32) -> i32;
            fn SetConsoleCP(code_page: u32) -> i32;
        }
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn setup_console_encoding() {
    // 非 Windows 平台不需要特殊处理
}

#[tokio::main]
async fn main() {
    // 设置控制台编码
    setup_console_encoding();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gruha_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Gruha assistant backend...");

    // 从环境变量读取配置并创建共享状态
    let config = AppConfig::from_env();
    let addr = config.bind_addr;
    let state = create_shared_state(config).unwrap();

    // 配置 CORS（允许所有来源）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

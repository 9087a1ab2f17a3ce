//! API 路由模块

mod analyze;
mod chat;
mod pages;
mod search;

pub use analyze::analyze_routes;
pub use chat::chat_routes;
pub use pages::page_routes;
pub use search::search_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(chat_routes())
        .merge(analyze_routes())
        .merge(search_routes())
        .with_state(state)
}

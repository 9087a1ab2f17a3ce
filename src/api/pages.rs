//! 静态页面路由
//!
//! 四个固定视图，模板编译期内嵌，无模板变量。

use axum::{response::Html, routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

async fn design_page() -> Html<&'static str> {
    Html(include_str!("../../templates/design.html"))
}

async fn basic_designs() -> Html<&'static str> {
    Html(include_str!("../../templates/basic_designs.html"))
}

async fn assistant_page() -> Html<&'static str> {
    Html(include_str!("../../templates/gruha_assistant.html"))
}

/// 创建静态页面路由
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/design", get(design_page))
        .route("/basic-designs", get(basic_designs))
        .route("/assistant", get(assistant_page))
}

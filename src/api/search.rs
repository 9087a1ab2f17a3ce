//! 图片搜索端点

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{ImagesResponse, SearchParams};
use crate::state::AppState;

/// 图片搜索处理器
///
/// 空查询直接返回空列表；调用失败同样降级为空列表，所有路径都返回 JSON。
async fn search_interiors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<ImagesResponse> {
    let query = params.query.trim();

    if query.is_empty() {
        return Json(ImagesResponse { images: Vec::new() });
    }

    let images = match state.unsplash.search_interiors(query).await {
        Ok(images) => {
            info!("Interior search returned {} images", images.len());
            images
        }
        Err(e) => {
            error!("Unsplash search error: {}", e);
            Vec::new()
        }
    };

    Json(ImagesResponse { images })
}

/// 创建图片搜索路由
pub fn search_routes() -> Router<Arc<AppState>> {
    Router::new().route("/search-interiors", get(search_interiors))
}

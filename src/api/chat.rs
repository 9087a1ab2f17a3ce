//! 助手聊天端点

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{ChatRequest, ReplyResponse};
use crate::services::PromptService;
use crate::state::AppState;

/// 聊天失败时的固定回复
const CHAT_FALLBACK_REPLY: &str = "Assistant unavailable right now.";

/// 助手聊天处理器
///
/// 调用失败不向客户端暴露错误状态码，统一降级为固定文案的 200 回复。
async fn assistant_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ReplyResponse> {
    let prompt = PromptService::new().build_chat_prompt(&req.message);

    let reply = match state.gemini.generate_text(&prompt).await {
        Ok(text) => {
            info!("Chat reply generated: {} chars", text.len());
            text
        }
        Err(e) => {
            error!("Gemini chat error: {}", e);
            CHAT_FALLBACK_REPLY.to_string()
        }
    };

    Json(ReplyResponse { reply })
}

/// 创建聊天路由
pub fn chat_routes() -> Router<Arc<AppState>> {
    Router::new().route("/assistant-chat", post(assistant_chat))
}

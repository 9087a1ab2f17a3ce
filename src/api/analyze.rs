//! 房间分析端点

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use std::fs;
use std::io::Cursor;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::AppResult;
use crate::models::ReplyResponse;
use crate::services::PromptService;
use crate::state::AppState;

/// 单个上传文件的大小上限（10 MiB）
const UPLOAD_FILE_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// 缺少 image 字段时的固定回复
const NO_IMAGE_REPLY: &str = "No image received.";

/// 房间分析处理器
///
/// 先落盘再按存储路径重新读出，解码归一化后连同分析 prompt 发给模型。
/// 失败时把错误文本带进 reply，状态码仍为 200。
async fn analyze_room(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Json<ReplyResponse> {
    // 取 image 字段
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        if let Ok(bytes) = field.bytes().await {
            upload = Some((filename, bytes.to_vec()));
        }
        break;
    }

    let Some((filename, bytes)) = upload else {
        return Json(ReplyResponse {
            reply: NO_IMAGE_REPLY.to_string(),
        });
    };

    let reply = match run_analysis(&state, &filename, &bytes).await {
        Ok(text) => {
            info!("Room analysis completed: {} chars", text.len());
            text
        }
        Err(e) => {
            error!("Gemini analysis error: {}", e);
            format!("AI analysis failed: {}", e)
        }
    };

    Json(ReplyResponse { reply })
}

/// 存储、解码并调用多模态模型
async fn run_analysis(state: &AppState, filename: &str, bytes: &[u8]) -> AppResult<String> {
    let stored = state.uploads.store(filename, bytes)?;
    info!("Analyzing upload: {}", stored.filename);

    // 同一请求内先写后读，读到的一定是本次上传的内容
    let raw = fs::read(&stored.path)?;

    // 解码并归一化为 RGB8，再重编码为 JPEG 供模型使用
    let decoded = image::load_from_memory(&raw)?;
    let rgb = decoded.to_rgb8();
    let mut encoded = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Jpeg)?;

    let prompt = PromptService::new().analysis_prompt();
    let text = state
        .gemini
        .generate_with_image(prompt, "image/jpeg", &encoded)
        .await?;

    Ok(text)
}

/// 创建房间分析路由
pub fn analyze_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/analyze-room",
        post(analyze_room).layer(DefaultBodyLimit::max(UPLOAD_FILE_SIZE_LIMIT)),
    )
}

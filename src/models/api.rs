//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

/// 助手聊天请求
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// 用户消息，缺失时按空字符串处理
    #[serde(default)]
    pub message: String,
}

/// 网关统一回复
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
}

/// 图片搜索查询参数
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// 图片搜索响应
#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

//! 应用状态管理
//!
//! 配置在启动时读取一次，客户端构建一次，通过 Arc 注入各个 handler。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::llm::GeminiClient;
use crate::services::UploadService;
use crate::unsplash::UnsplashClient;
use crate::utils::RequestLogger;

/// 应用共享状态
///
/// 配置值在构建时分发给各客户端，handler 只依赖这里的字段。
pub struct AppState {
    /// Gemini 客户端
    pub gemini: GeminiClient,
    /// Unsplash 搜索客户端
    pub unsplash: UnsplashClient,
    /// 上传文件存储
    pub uploads: UploadService,
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> AppResult<Arc<AppState>> {
    let logger = Arc::new(RequestLogger::default());

    let gemini = GeminiClient::new(
        config.gemini_api_key,
        config.gemini_model,
        Arc::clone(&logger),
    )?;
    let unsplash = UnsplashClient::new(config.unsplash_access_key, Arc::clone(&logger))?;

    let uploads = UploadService::new(config.upload_dir, config.upload_max_age_secs);
    // 启动时清一次过期上传
    uploads.sweep_expired();

    Ok(Arc::new(AppState {
        gemini,
        unsplash,
        uploads,
    }))
}

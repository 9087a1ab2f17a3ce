//! 统一错误处理模块
//!
//! 定义应用级错误类型。对外契约是所有路由都返回 200 JSON，
//! 错误在各个 handler 边界处统一转换为对应的 reply 文案。

use thiserror::Error;

use crate::llm::LlmError;
use crate::unsplash::SearchError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 上传文件读写错误
    #[error("upload storage error: {0}")]
    Upload(#[from] std::io::Error),

    /// 图片解码/编码错误
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// 模型调用错误
    #[error("{0}")]
    Llm(#[from] LlmError),

    /// 图片搜索调用错误
    #[error("{0}")]
    Search(#[from] SearchError),
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;

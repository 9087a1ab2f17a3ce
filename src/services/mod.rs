//! 服务层模块

mod prompt_service;
mod upload_service;

pub use prompt_service::PromptService;
pub use upload_service::UploadService;

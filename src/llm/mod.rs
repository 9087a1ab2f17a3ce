//! LLM 模块
//!
//! 提供 Gemini generateContent 客户端，支持纯文本和图文混合输入。

mod client;
mod format;
mod types;

pub use client::GeminiClient;
pub use types::*;

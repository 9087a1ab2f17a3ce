//! Prompt 构建服务
//!
//! 负责构建聊天 prompt 和房间分析 prompt。

/// 聊天人设前言
const CHAT_PERSONA: &str = "You are Gruha, a helpful interior design assistant.";

/// 房间分析提示词
const ANALYSIS_PROMPT: &str = r#"You are an expert interior designer.

Analyze this room and provide:
• What you observe
• Improvement suggestions
• Furniture ideas
• Estimated budget in INR"#;

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建聊天 prompt
    ///
    /// 人设前言 + "User: " + 原始消息，消息内容不做任何转义。
    pub fn build_chat_prompt(&self, user_message: &str) -> String {
        format!("{}\nUser: {}", CHAT_PERSONA, user_message)
    }

    /// 房间分析 prompt
    pub fn analysis_prompt(&self) -> &'static str {
        ANALYSIS_PROMPT
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_prompt() {
        let service = PromptService::new();
        let prompt = service.build_chat_prompt("What sofa fits a small room?");
        assert!(prompt.starts_with("You are Gruha"));
        assert!(prompt.ends_with("User: What sofa fits a small room?"));
    }

    #[test]
    fn test_build_chat_prompt_empty_message() {
        let service = PromptService::new();
        let prompt = service.build_chat_prompt("");
        assert!(prompt.ends_with("User: "));
    }

    #[test]
    fn test_analysis_prompt_sections() {
        let service = PromptService::new();
        let prompt = service.analysis_prompt();
        assert!(prompt.contains("expert interior designer"));
        assert!(prompt.contains("Estimated budget in INR"));
    }
}

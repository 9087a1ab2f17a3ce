//! Gemini API 类型定义

use serde::{Deserialize, Serialize};

/// generateContent 请求载荷
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// 一轮内容，由若干 part 组成
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

/// 内容 part：文本或内嵌图片数据
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// 内嵌二进制数据（base64 编码）
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// generateContent 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// 提取首个候选的首个文本 part
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| match p {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
    }
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("Gemini API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("{0}")]
    ConfigError(String),

    /// 响应中没有可用文本
    #[error("model returned no text candidates")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_data_serialization() {
        let part = ContentPart::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["inline_data"]["mimeType"], "image/jpeg");
        assert_eq!(json["inline_data"]["data"], "aGVsbG8=");
    }

    #[test]
    fn test_first_text() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "A bright living room."}]
                },
                "finishReason": "STOP"
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.first_text(), Some("A bright living room."));
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.first_text(), None);
    }
}

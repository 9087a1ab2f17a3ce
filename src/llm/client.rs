//! Gemini 客户端

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

use crate::utils::RequestLogger;

use super::format::{build_generate_endpoint, GEMINI_API_BASE};
use super::types::{
    Content, ContentPart, GenerateContentRequest, GenerateContentResponse, InlineData, LlmError,
};

/// Gemini generateContent 客户端
///
/// 单次非流式调用，文本与图文输入共用同一条请求路径。
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    logger: Arc<RequestLogger>,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    ///
    /// 允许空密钥构建，调用时才返回配置错误，服务照常启动。
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        logger: Arc<RequestLogger>,
    ) -> Result<Self, LlmError> {
        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
            model: model.into(),
            logger,
        })
    }

    /// 纯文本生成
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let parts = vec![ContentPart::Text {
            text: prompt.to_string(),
        }];
        self.generate(parts, prompt).await
    }

    /// 图文混合生成
    ///
    /// 图片字节以 base64 编码为 inline_data part，跟在文本 prompt 之后。
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        image_bytes: &[u8],
    ) -> Result<String, LlmError> {
        let parts = vec![
            ContentPart::Text {
                text: prompt.to_string(),
            },
            ContentPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.to_string(),
                    data: BASE64.encode(image_bytes),
                },
            },
        ];
        self.generate(parts, prompt).await
    }

    /// 发送 generateContent 请求并提取文本
    async fn generate(
        &self,
        parts: Vec<ContentPart>,
        input_preview: &str,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::ConfigError(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let endpoint = build_generate_endpoint(&self.base_url, &self.model, &self.api_key);
        // 日志里不带 key 查询参数
        let log_endpoint = endpoint.split('?').next().unwrap_or(&endpoint).to_string();

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let request_id = RequestLogger::generate_request_id();
        let entry = self.logger.log_request(
            &request_id,
            "gemini",
            &log_endpoint,
            &self.model,
            input_preview,
            &self.api_key,
        );
        let start = Instant::now();

        debug!("Gemini API request: endpoint={}, model={}", log_endpoint, self.model);

        let response = match self.client.post(&endpoint).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger
                    .log_error(entry, start, "http", &e.to_string(), None);
                return Err(LlmError::HttpError(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: status={}, body={}",
                status_code,
                &error_text[..error_text.len().min(500)]
            );
            self.logger
                .log_error(entry, start, "api", &error_text, Some(status_code));
            return Err(LlmError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let body: GenerateContentResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                self.logger
                    .log_error(entry, start, "decode", &e.to_string(), None);
                return Err(LlmError::HttpError(e));
            }
        };

        match body.first_text() {
            Some(text) => {
                let text = text.to_string();
                self.logger.log_success(entry, start, text.len(), &text);
                Ok(text)
            }
            None => {
                self.logger
                    .log_error(entry, start, "empty", "no text candidates", None);
                Err(LlmError::EmptyResponse)
            }
        }
    }
}

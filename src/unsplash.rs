//! Unsplash 图片搜索客户端

use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

use crate::utils::RequestLogger;

/// 搜索端点
const SEARCH_PHOTOS_URL: &str = "https://api.unsplash.com/search/photos";

/// 每次搜索返回的结果数
const PER_PAGE: u32 = 12;

/// 搜索错误类型
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("Unsplash API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("{0}")]
    ConfigError(String),
}

/// 搜索响应
#[derive(Debug, Deserialize)]
struct SearchPhotosResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

/// 室内设计图片搜索始终在用户查询后追加的限定词
fn build_search_query(query: &str) -> String {
    format!("{} interior design", query)
}

/// Unsplash 搜索客户端
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    logger: Arc<RequestLogger>,
}

impl UnsplashClient {
    /// 创建新的搜索客户端
    pub fn new(
        access_key: impl Into<String>,
        logger: Arc<RequestLogger>,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SearchError::HttpError)?;

        Ok(Self {
            client,
            access_key: access_key.into(),
            logger,
        })
    }

    /// 搜索室内设计图片，返回 regular 尺寸的图片 URL
    pub async fn search_interiors(&self, query: &str) -> Result<Vec<String>, SearchError> {
        if self.access_key.is_empty() {
            return Err(SearchError::ConfigError(
                "Unsplash access key is not configured".to_string(),
            ));
        }

        let search_query = build_search_query(query);
        let per_page = PER_PAGE.to_string();

        let request_id = RequestLogger::generate_request_id();
        let entry = self.logger.log_request(
            &request_id,
            "unsplash",
            SEARCH_PHOTOS_URL,
            "search/photos",
            &search_query,
            &self.access_key,
        );
        let start = Instant::now();

        debug!("Unsplash search: query={}", search_query);

        let response = match self
            .client
            .get(SEARCH_PHOTOS_URL)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", search_query.as_str()),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.logger
                    .log_error(entry, start, "http", &e.to_string(), None);
                return Err(SearchError::HttpError(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Unsplash API error: status={}, body={}",
                status_code,
                &error_text[..error_text.len().min(500)]
            );
            self.logger
                .log_error(entry, start, "api", &error_text, Some(status_code));
            return Err(SearchError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let body: SearchPhotosResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                self.logger
                    .log_error(entry, start, "decode", &e.to_string(), None);
                return Err(SearchError::HttpError(e));
            }
        };

        let images: Vec<String> = body.results.into_iter().map(|p| p.urls.regular).collect();
        self.logger
            .log_success(entry, start, images.len(), &images.join(", "));

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_query() {
        assert_eq!(build_search_query("kitchen"), "kitchen interior design");
        assert_eq!(
            build_search_query("scandinavian bedroom"),
            "scandinavian bedroom interior design"
        );
    }

    #[test]
    fn test_search_response_deserialization() {
        let body = serde_json::json!({
            "total": 1,
            "total_pages": 1,
            "results": [
                {"id": "abc", "urls": {"raw": "r", "regular": "https://images.unsplash.com/photo-1?w=1080"}}
            ]
        });
        let response: SearchPhotosResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(
            response.results[0].urls.regular,
            "https://images.unsplash.com/photo-1?w=1080"
        );
    }
}

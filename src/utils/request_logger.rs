//! 外部请求日志记录器
//!
//! 记录所有出站 Gemini / Unsplash 调用到 JSONL 文件，便于调试和分析。

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

/// 请求日志条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// 请求 ID
    pub request_id: String,
    /// 时间戳
    pub timestamp: DateTime<Utc>,
    /// 外部服务名（gemini / unsplash）
    pub provider: String,
    /// 端点 URL（不含密钥参数）
    pub endpoint: String,
    /// 模型名或操作名
    pub model: String,
    /// API 密钥（脱敏）
    pub api_key_masked: String,
    /// 输入预览
    pub input_preview: String,
    /// 状态
    pub status: String,
    /// 持续时间（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// 响应长度（文本字节数或结果条数）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_length: Option<usize>,
    /// 响应预览
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_preview: Option<String>,
    /// 错误类型
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// HTTP 状态码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// 请求日志记录器
pub struct RequestLogger {
    log_path: PathBuf,
    max_entries: usize,
    file: Mutex<Option<File>>,
}

impl RequestLogger {
    /// 创建新的日志记录器
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        let log_dir = log_dir.unwrap_or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("storage")
        });

        // 确保目录存在
        let _ = fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("external_requests.jsonl");

        Self {
            log_path,
            max_entries: 1000,
            file: Mutex::new(None),
        }
    }

    /// 生成请求 ID
    pub fn generate_request_id() -> String {
        Uuid::new_v4().to_string()[..8].to_string()
    }

    /// API 密钥脱敏
    pub fn mask_api_key(api_key: &str) -> String {
        if api_key.len() <= 8 {
            "*".repeat(api_key.len())
        } else {
            format!("{}...{}", &api_key[..4], &api_key[api_key.len() - 4..])
        }
    }

    /// 截断字符串
    fn truncate(s: &str, max_len: usize) -> String {
        if s.len() <= max_len {
            s.to_string()
        } else {
            let mut end = max_len;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &s[..end])
        }
    }

    /// 记录请求开始
    pub fn log_request(
        &self,
        request_id: &str,
        provider: &str,
        endpoint: &str,
        model: &str,
        input: &str,
        api_key: &str,
    ) -> LogEntry {
        LogEntry {
            request_id: request_id.to_string(),
            timestamp: Utc::now(),
            provider: provider.to_string(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key_masked: Self::mask_api_key(api_key),
            input_preview: Self::truncate(input, 200),
            status: "pending".to_string(),
            duration_ms: None,
            response_length: None,
            response_preview: None,
            error_type: None,
            error_message: None,
            status_code: None,
        }
    }

    /// 记录成功
    pub fn log_success(
        &self,
        mut entry: LogEntry,
        start_time: Instant,
        response_length: usize,
        response_preview: &str,
    ) {
        entry.status = "success".to_string();
        entry.duration_ms = Some(start_time.elapsed().as_millis() as u64);
        entry.response_length = Some(response_length);
        entry.response_preview = Some(Self::truncate(response_preview, 300));
        self.write_entry(&entry);
    }

    /// 记录错误
    pub fn log_error(
        &self,
        mut entry: LogEntry,
        start_time: Instant,
        error_type: &str,
        error_message: &str,
        status_code: Option<u16>,
    ) {
        entry.status = "error".to_string();
        entry.duration_ms = Some(start_time.elapsed().as_millis() as u64);
        entry.error_type = Some(error_type.to_string());
        entry.error_message = Some(Self::truncate(error_message, 500));
        entry.status_code = status_code;
        self.write_entry(&entry);
    }

    /// 写入日志条目
    fn write_entry(&self, entry: &LogEntry) {
        let mut file_guard = self.file.lock();

        // 懒加载文件
        if file_guard.is_none() {
            if let Ok(f) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_path)
            {
                *file_guard = Some(f);
            }
        }

        if let Some(file) = file_guard.as_mut() {
            if let Ok(json) = serde_json::to_string(entry) {
                let _ = writeln!(file, "{}", json);
                let _ = file.flush();
            }
        }

        drop(file_guard);
        self.cleanup_if_needed();
    }

    /// 清理旧日志
    fn cleanup_if_needed(&self) {
        if let Ok(file) = File::open(&self.log_path) {
            let reader = BufReader::new(file);
            let lines: Vec<String> = reader.lines().filter_map(|l| l.ok()).collect();

            if lines.len() > self.max_entries {
                let keep_lines = &lines[lines.len() - self.max_entries..];
                if let Ok(mut file) = File::create(&self.log_path) {
                    for line in keep_lines {
                        let _ = writeln!(file, "{}", line);
                    }
                }
            }
        }
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(RequestLogger::mask_api_key(""), "");
        assert_eq!(RequestLogger::mask_api_key("short"), "*****");
        assert_eq!(
            RequestLogger::mask_api_key("sk-abcdef1234567890"),
            "sk-a...7890"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(RequestLogger::truncate("hello", 10), "hello");
        assert_eq!(RequestLogger::truncate("hello world", 5), "hello...");
    }

    #[test]
    fn test_log_request_masks_key() {
        let dir = std::env::temp_dir().join("gruha-logger-test");
        let logger = RequestLogger::new(Some(dir));
        let entry = logger.log_request(
            "req1",
            "gemini",
            "https://example.test/models/x:generateContent",
            "gemini-1.5-flash",
            "hello",
            "sk-abcdef1234567890",
        );
        assert_eq!(entry.api_key_masked, "sk-a...7890");
        assert_eq!(entry.status, "pending");
        assert!(!entry.api_key_masked.contains("cdef12345"));
    }
}

//! 应用配置管理
//!
//! 启动时从环境变量读取一次配置，之后通过 AppState 注入各个 handler，
//! 不使用全局可变状态。

use std::net::SocketAddr;
use std::path::PathBuf;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥
    pub gemini_api_key: String,

    /// Gemini 模型名称
    pub gemini_model: String,

    /// Unsplash Access Key
    pub unsplash_access_key: String,

    /// 上传文件存储目录
    pub upload_dir: PathBuf,

    /// 上传文件保留时长（秒），超过后由清理扫描删除
    pub upload_max_age_secs: u64,

    /// 监听地址
    pub bind_addr: SocketAddr,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_age_secs() -> u64 {
    86400
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: default_model(),
            unsplash_access_key: String::new(),
            upload_dir: default_upload_dir(),
            upload_max_age_secs: default_max_age_secs(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    ///
    /// 缺失或无法解析的变量回退到默认值，密钥缺失不算启动错误，
    /// 对应的网关会在调用时返回各自的降级响应。
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // 线上部署使用的 Gemini 密钥变量名
        if let Ok(key) = std::env::var("my_genapi") {
            config.gemini_api_key = key;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.is_empty() {
                config.gemini_model = model;
            }
        }
        if let Ok(key) = std::env::var("UNSPLASH_ACCESS_KEY") {
            config.unsplash_access_key = key;
        }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            if !dir.is_empty() {
                config.upload_dir = PathBuf::from(dir);
            }
        }
        if let Ok(secs) = std::env::var("UPLOAD_MAX_AGE_SECS") {
            if let Ok(secs) = secs.parse() {
                config.upload_max_age_secs = secs;
            }
        }
        if let Ok(addr) = std::env::var("BIND_ADDR") {
            if let Ok(addr) = addr.parse() {
                config.bind_addr = addr;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.upload_max_age_secs, 86400);
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert!(config.gemini_api_key.is_empty());
        assert!(config.unsplash_access_key.is_empty());
    }
}

//! 上传文件存储服务
//!
//! 清洗客户端文件名，按内容摘要生成存储键，并对过期文件做清理扫描。

use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::AppResult;

/// 声明的图片扩展名集合，用于归一化存储键的后缀
const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// 文件名为空或完全不合法时的兜底名称
const DEFAULT_FILENAME: &str = "room.jpg";

/// 清洗客户端提供的文件名
///
/// 只保留 basename（同时处理 `/` 和 `\` 分隔符），字符白名单为
/// 字母数字和 `. - _ ` 及空格，结果为空时回退到默认名。
pub fn sanitize_filename(raw: &str) -> String {
    let basename = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(DEFAULT_FILENAME);

    let safe: String = basename
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
        .collect();

    let safe = safe.trim();
    if safe.is_empty() || safe.chars().all(|c| c == '.') {
        DEFAULT_FILENAME.to_string()
    } else {
        safe.to_string()
    }
}

/// 从清洗后的文件名取扩展名，限定在声明的集合内，否则回退 jpg
fn extension_for(sanitized: &str) -> String {
    let ext = sanitized
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        ext
    } else {
        "jpg".to_string()
    }
}

/// 已落盘的上传文件
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// 存储路径：`<upload-dir>/<sha256>.<ext>`
    pub path: PathBuf,
    /// 清洗后的原始文件名（仅展示用途）
    pub filename: String,
}

/// 上传文件存储
pub struct UploadService {
    upload_dir: PathBuf,
    max_age: Duration,
}

impl UploadService {
    /// 创建存储服务并确保目录存在
    pub fn new(upload_dir: PathBuf, max_age_secs: u64) -> Self {
        let _ = fs::create_dir_all(&upload_dir);
        Self {
            upload_dir,
            max_age: Duration::from_secs(max_age_secs),
        }
    }

    /// 写入上传内容
    ///
    /// 存储键是内容的 SHA-256 摘要，相同内容重复上传会命中同一路径，
    /// 覆盖写是幂等的。写入后顺带跑一次过期清理。
    pub fn store(&self, raw_filename: &str, bytes: &[u8]) -> AppResult<StoredUpload> {
        let filename = sanitize_filename(raw_filename);
        let ext = extension_for(&filename);

        let digest = Sha256::digest(bytes);
        let key = format!("{}.{}", hex::encode(digest), ext);
        let path = self.upload_dir.join(key);

        fs::write(&path, bytes)?;
        debug!("Stored upload: {} -> {}", filename, path.display());

        self.sweep_expired();

        Ok(StoredUpload { path, filename })
    }

    /// 删除超过保留时长的文件，失败只记日志
    pub fn sweep_expired(&self) {
        let entries = match fs::read_dir(&self.upload_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Upload dir sweep skipped: {}", e);
                return;
            }
        };

        for entry in entries.flatten() {
            let expired = entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|mtime| mtime.elapsed().ok())
                .map(|age| age >= self.max_age)
                .unwrap_or(false);

            if expired {
                if let Err(e) = fs::remove_file(entry.path()) {
                    warn!("Failed to remove expired upload {:?}: {}", entry.path(), e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_service(max_age_secs: u64) -> UploadService {
        let dir = std::env::temp_dir()
            .join("gruha-upload-test")
            .join(uuid::Uuid::new_v4().to_string());
        UploadService::new(dir, max_age_secs)
    }

    #[test]
    fn test_sanitize_filename_strips_paths() {
        assert_eq!(sanitize_filename("room.png"), "room.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\photos\\room.jpg"), "room.jpg");
        assert_eq!(sanitize_filename("my room (2).webp"), "my room 2.webp");
    }

    #[test]
    fn test_sanitize_filename_empty_falls_back() {
        assert_eq!(sanitize_filename(""), DEFAULT_FILENAME);
        assert_eq!(sanitize_filename("///"), DEFAULT_FILENAME);
        assert_eq!(sanitize_filename("<>:?*"), DEFAULT_FILENAME);
    }

    #[test]
    fn test_extension_normalization() {
        assert_eq!(extension_for("room.PNG"), "png");
        assert_eq!(extension_for("room.jpeg"), "jpeg");
        assert_eq!(extension_for("room.gif"), "jpg");
        assert_eq!(extension_for("room"), "jpg");
    }

    #[test]
    fn test_store_keys_by_content() {
        let service = temp_service(3600);

        let a = service.store("room.png", b"first bytes").unwrap();
        let b = service.store("room.png", b"second bytes").unwrap();
        let c = service.store("other-name.png", b"first bytes").unwrap();

        // 同名不同内容 -> 不同路径；不同名同内容 -> 同一路径
        assert_ne!(a.path, b.path);
        assert_eq!(a.path, c.path);

        assert_eq!(fs::read(&a.path).unwrap(), b"first bytes");
        assert_eq!(fs::read(&b.path).unwrap(), b"second bytes");
    }

    #[test]
    fn test_store_reads_back_latest_content() {
        let service = temp_service(3600);

        service.store("room.png", b"one").unwrap();
        let stored = service.store("room.png", b"two").unwrap();

        assert_eq!(fs::read(&stored.path).unwrap(), b"two");
    }

    #[test]
    fn test_sweep_removes_expired_files() {
        let service = temp_service(0);
        let stored = service.store("room.png", b"bytes").unwrap();

        // max_age 为 0 时写入后的清理立即删除
        service.sweep_expired();
        assert!(!stored.path.exists());
    }
}

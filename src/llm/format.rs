//! Gemini 端点 URL 构建工具

/// Gemini API 基础 URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();

    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 构建 generateContent 端点
///
/// 密钥以 `key` 查询参数传递。
pub fn build_generate_endpoint(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        fix_base_url(base_url),
        model,
        api_key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_base_url() {
        assert_eq!(
            fix_base_url("https://generativelanguage.googleapis.com/v1beta/"),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(
            fix_base_url("https://generativelanguage.googleapis.com//v1beta"),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_build_generate_endpoint() {
        assert_eq!(
            build_generate_endpoint(GEMINI_API_BASE, "gemini-1.5-flash", "k123"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=k123"
        );
    }
}

//! Provider Credentials
//!
//! 进程级的默认 API key，启动时从配置读取，之后只读

/// 外部服务凭证
///
/// 空字符串视为未配置
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    groq_api_key: Option<String>,
    fal_api_key: Option<String>,
}

impl ProviderCredentials {
    pub fn new(groq_api_key: Option<String>, fal_api_key: Option<String>) -> Self {
        Self {
            groq_api_key: non_empty(groq_api_key),
            fal_api_key: non_empty(fal_api_key),
        }
    }

    /// 文本服务默认 key
    pub fn groq_api_key(&self) -> Option<&str> {
        self.groq_api_key.as_deref()
    }

    /// 图像服务 key
    pub fn fal_api_key(&self) -> Option<&str> {
        self.fal_api_key.as_deref()
    }

    /// 选择文本服务 key：请求级覆盖优先于默认值
    pub fn resolve_groq_key<'a>(&'a self, override_key: Option<&'a str>) -> Option<&'a str> {
        override_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .or(self.groq_api_key())
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Provider Error - 外部生成服务的公共错误类型

use thiserror::Error;

/// 外部 AI 服务调用错误
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 服务返回非 2xx 状态码
    #[error("HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::NetworkError(format!("Cannot connect to provider: {}", e))
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else {
            ProviderError::NetworkError(e.to_string())
        }
    }
}

//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，HTTP 层负责映射为状态码

use thiserror::Error;

use crate::application::ports::ProviderError;
use crate::domain::JsonArrayError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求参数无效
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 缺少服务凭证
    #[error("{0}")]
    ConfigurationError(String),

    /// 模型回复无法解析
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 外部服务返回非成功状态码
    #[error("{body}")]
    UpstreamError { status: u16, body: String },

    /// 网络错误、超时等其他外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// 创建解析错误
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    /// 文本服务的任何调用失败都归为外部服务错误（不透传上游状态码）
    pub fn from_completion_error(err: ProviderError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<ProviderError> for ApplicationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UpstreamStatus { status, body } => Self::UpstreamError { status, body },
            ProviderError::InvalidResponse(msg) => Self::ParseError(msg),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<JsonArrayError> for ApplicationError {
    fn from(err: JsonArrayError) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_keeps_code_and_body() {
        let err: ApplicationError = ProviderError::UpstreamStatus {
            status: 429,
            body: "rate limited".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            ApplicationError::UpstreamError { status: 429, ref body } if body == "rate limited"
        ));
    }

    #[test]
    fn test_timeout_is_external_service_error() {
        let err: ApplicationError = ProviderError::Timeout.into();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
        assert_eq!(err.to_string(), "External service error: Request timeout");
    }

    #[test]
    fn test_completion_upstream_is_not_passed_through() {
        let err = ApplicationError::from_completion_error(ProviderError::UpstreamStatus {
            status: 401,
            body: "bad key".to_string(),
        });
        assert!(matches!(err, ApplicationError::ExternalServiceError(ref m) if m == "HTTP 401: bad key"));
    }

    #[test]
    fn test_missing_array_is_parse_error() {
        let err: ApplicationError = JsonArrayError::NotFound.into();
        assert!(matches!(err, ApplicationError::ParseError(_)));
        assert_eq!(err.to_string(), "Parse error: No JSON array found in response");
    }
}

//! HTTP Error Handling
//!
//! ApplicationError -> HTTP 状态码 + 统一错误响应体

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            errno: i32::from(status.as_u16()),
            error: error.into(),
            data: None,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
    /// 透传外部服务的状态码
    Upstream { status: StatusCode, message: String },
}

impl ApiError {
    /// 将应用层错误映射为 HTTP 错误，`operation` 用于 4xx/5xx 以外的失败说明
    ///
    /// 例如 `ApiError::failed("Analysis", err)` -> "Analysis failed: ..."
    pub fn failed(operation: &str, err: ApplicationError) -> Self {
        match err {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::ConfigurationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::UpstreamError { status, body } => ApiError::Upstream {
                status: upstream_status(status),
                message: format!("{} failed: {}", operation, body),
            },
            other @ (ApplicationError::ParseError(_) | ApplicationError::ExternalServiceError(_)) => {
                ApiError::Internal(format!("{} failed: {}", operation, other))
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => *status,
        }
    }
}

/// 上游状态码不是错误码时（理论上不会出现）按 502 处理
fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error");
                msg
            }
            ApiError::Upstream { message, .. } => {
                tracing::error!(errno = status.as_u16(), error = %message, "Upstream service error");
                message
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

//! Service Handlers
//!
//! 服务元信息与健康检查，不调用外部服务

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::GetServiceStatus;
use crate::infrastructure::http::dto::{HealthResponse, RootResponse};
use crate::infrastructure::http::state::AppState;

/// 服务元信息与路由列表
pub async fn root() -> Json<RootResponse> {
    let endpoints = BTreeMap::from([
        ("analyze", "POST /api/analyze"),
        ("prompts", "POST /api/generate-prompts"),
        ("image", "POST /api/generate-image"),
        ("health", "GET /health"),
    ]);

    Json(RootResponse {
        message: "Novel to Manga API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

/// 健康检查 - 报告凭证是否配置
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = state.service_status_handler.handle(GetServiceStatus);

    Json(HealthResponse {
        status: "healthy",
        groq_configured: status.groq_configured,
        fal_configured: status.fal_configured,
        version: status.version,
        rust_version: status.rust_version,
    })
}

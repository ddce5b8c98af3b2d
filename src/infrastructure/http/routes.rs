//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET   服务元信息与路由列表
//! - /health                GET   健康检查（凭证是否配置）
//! - /api/analyze           POST  小说文本 -> 分镜场景
//! - /api/generate-prompts  POST  场景 -> 每格图像提示词
//! - /api/generate-image    POST  提示词 -> 漫画风格图像 URL

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(handlers::analyze_novel))
        .route("/generate-prompts", post(handlers::generate_prompts))
        .route("/generate-image", post(handlers::generate_image))
}

//! Manga Handlers
//!
//! 场景拆分、提示词生成、图像生成

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{AnalyzeNovel, GenerateImage, GenerateScenePrompts};
use crate::infrastructure::http::dto::{
    AnalyzeResponse, ImageGenerationRequest, ImagePromptRequest, ImageResponse, NovelInput,
    PromptsResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 将小说文本拆分为分镜场景
pub async fn analyze_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NovelInput>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let cmd = AnalyzeNovel {
        text: req.text,
        api_key_override: req.groq_key,
    };

    let result = state
        .analyze_novel_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::failed("Analysis", e))?;

    let count = result.count();
    Ok(Json(AnalyzeResponse {
        scenes: result.scenes,
        count,
    }))
}

/// 为单个场景生成每格的图像提示词
pub async fn generate_prompts(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImagePromptRequest>,
) -> Result<Json<PromptsResponse>, ApiError> {
    let cmd = GenerateScenePrompts { scene: req.scene };

    let result = state
        .generate_prompts_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::failed("Prompt generation", e))?;

    Ok(Json(PromptsResponse {
        prompts: result.prompts,
    }))
}

/// 生成漫画风格的分镜图像
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImageGenerationRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let cmd = GenerateImage {
        prompt: req.prompt,
        width: req.width,
        height: req.height,
    };

    let result = state
        .generate_image_handler
        .handle(cmd)
        .await
        .map_err(|e| ApiError::failed("Image generation", e))?;

    Ok(Json(ImageResponse {
        image_url: result.image_url,
        prompt_used: result.prompt_used,
    }))
}

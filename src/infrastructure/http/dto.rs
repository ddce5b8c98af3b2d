//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::manga::{Scene, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};

// ============================================================================
// Analyze
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NovelInput {
    pub text: String,
    /// 可选的请求级 Groq key
    #[serde(default)]
    pub groq_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub scenes: Vec<Value>,
    pub count: usize,
}

// ============================================================================
// Prompts
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ImagePromptRequest {
    pub scene: Scene,
}

#[derive(Debug, Serialize)]
pub struct PromptsResponse {
    pub prompts: Vec<String>,
}

// ============================================================================
// Image
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_IMAGE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_IMAGE_HEIGHT
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub image_url: String,
    pub prompt_used: String,
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub groq_configured: bool,
    pub fal_configured: bool,
    pub version: &'static str,
    pub rust_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_request_defaults() {
        let req: ImageGenerationRequest = serde_json::from_str(r#"{"prompt": "cat"}"#).unwrap();
        assert_eq!(req.width, 512);
        assert_eq!(req.height, 768);
    }

    #[test]
    fn test_novel_input_key_is_optional() {
        let req: NovelInput = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert!(req.groq_key.is_none());
    }
}

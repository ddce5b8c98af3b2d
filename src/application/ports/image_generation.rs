//! Image Generation Port - 图像生成服务抽象

use async_trait::async_trait;

use super::provider::ProviderError;
use crate::domain::manga::ImageSize;

/// 图像生成请求
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub size: ImageSize,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
    pub num_images: u32,
}

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// 服务返回的第一张图片 URL
    pub url: String,
}

/// Image Generation Port
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    /// 单次同步调用，不重试
    async fn generate(
        &self,
        api_key: &str,
        request: ImageRequest,
    ) -> Result<GeneratedImage, ProviderError>;
}

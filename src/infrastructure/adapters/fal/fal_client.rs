//! FAL Client - 调用 FAL.ai 图像生成服务
//!
//! 实现 ImageGenerationPort trait
//!
//! 外部 API:
//! POST https://fal.run/fal-ai/fast-sdxl
//! Header: Authorization: Key <key>
//! Request: {"prompt", "negative_prompt", "image_size": {"width", "height"},
//!           "num_inference_steps", "guidance_scale", "num_images"}
//! Response: {"images": [{"url": "..."}]}

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GeneratedImage, ImageGenerationPort, ImageRequest, ProviderError};

#[derive(Debug, Serialize)]
struct ImageSizeBody {
    width: u32,
    height: u32,
}

/// 生成请求体
#[derive(Debug, Serialize)]
struct FalGenerateBody<'a> {
    prompt: &'a str,
    negative_prompt: &'a str,
    image_size: ImageSizeBody,
    num_inference_steps: u32,
    guidance_scale: f32,
    num_images: u32,
}

#[derive(Debug, Deserialize)]
struct FalGenerateReply {
    #[serde(default)]
    images: Vec<FalImage>,
}

#[derive(Debug, Deserialize)]
struct FalImage {
    url: String,
}

/// FAL 客户端配置
#[derive(Debug, Clone)]
pub struct FalClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 模型路径
    pub model_path: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for FalClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fal.run".to_string(),
            model_path: "fal-ai/fast-sdxl".to_string(),
            timeout_secs: 60,
        }
    }
}

impl FalClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// FAL 客户端
///
/// 每次调用独立超时，不重试
pub struct FalClient {
    client: Client,
    config: FalClientConfig,
}

impl FalClient {
    pub fn new(config: FalClientConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model_path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ImageGenerationPort for FalClient {
    async fn generate(
        &self,
        api_key: &str,
        request: ImageRequest,
    ) -> Result<GeneratedImage, ProviderError> {
        let body = FalGenerateBody {
            prompt: &request.prompt,
            negative_prompt: &request.negative_prompt,
            image_size: ImageSizeBody {
                width: request.size.width(),
                height: request.size.height(),
            },
            num_inference_steps: request.num_inference_steps,
            guidance_scale: request.guidance_scale,
            num_images: request.num_images,
        };

        tracing::debug!(
            url = %self.generate_url(),
            size = %request.size,
            prompt_len = request.prompt.len(),
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header(AUTHORIZATION, format!("Key {}", api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::UpstreamStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let reply: FalGenerateReply = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to decode image reply: {}", e)))?;

        let image = reply
            .images
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("No image returned".to_string()))?;

        Ok(GeneratedImage { url: image.url })
    }
}

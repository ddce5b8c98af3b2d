//! Panel Image Handler

use std::sync::Arc;

use crate::application::commands::GenerateImage;
use crate::application::credentials::ProviderCredentials;
use crate::application::error::ApplicationError;
use crate::application::ports::{ImageGenerationPort, ImageRequest};
use crate::domain::manga::{manga_image_prompt, ImageSize, MANGA_NEGATIVE_PROMPT};

/// 缺少 FAL key 时的提示
pub const FAL_KEY_REQUIRED: &str = "FAL.ai API key required. Sign up free at fal.ai";

const NUM_INFERENCE_STEPS: u32 = 25;
const GUIDANCE_SCALE: f32 = 7.5;
const NUM_IMAGES: u32 = 1;

/// 图像生成响应
#[derive(Debug, Clone)]
pub struct GenerateImageResponse {
    pub image_url: String,
    /// 实际发送给图像服务的完整提示词
    pub prompt_used: String,
}

/// GenerateImage Handler
pub struct GenerateImageHandler {
    image_engine: Arc<dyn ImageGenerationPort>,
    credentials: Arc<ProviderCredentials>,
}

impl GenerateImageHandler {
    pub fn new(
        image_engine: Arc<dyn ImageGenerationPort>,
        credentials: Arc<ProviderCredentials>,
    ) -> Self {
        Self {
            image_engine,
            credentials,
        }
    }

    pub async fn handle(&self, command: GenerateImage) -> Result<GenerateImageResponse, ApplicationError> {
        // 在任何网络调用之前检查 key
        let api_key = self
            .credentials
            .fal_api_key()
            .ok_or_else(|| ApplicationError::configuration(FAL_KEY_REQUIRED))?;

        if command.prompt.trim().is_empty() {
            return Err(ApplicationError::validation("Prompt cannot be empty"));
        }
        let size =
            ImageSize::new(command.width, command.height).map_err(ApplicationError::validation)?;

        let full_prompt = manga_image_prompt(&command.prompt);
        let request = ImageRequest {
            prompt: full_prompt.clone(),
            negative_prompt: MANGA_NEGATIVE_PROMPT.to_string(),
            size,
            num_inference_steps: NUM_INFERENCE_STEPS,
            guidance_scale: GUIDANCE_SCALE,
            num_images: NUM_IMAGES,
        };

        let image = self.image_engine.generate(api_key, request).await?;

        tracing::info!(
            size = %size,
            image_url = %image.url,
            "Panel image generated"
        );

        Ok(GenerateImageResponse {
            image_url: image.url,
            prompt_used: full_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manga::MANGA_STYLE_PREFIX;
    use crate::infrastructure::adapters::{FakeImageClient, FakeImageReply};

    fn handler(client: Arc<FakeImageClient>, key: Option<&str>) -> GenerateImageHandler {
        let creds = ProviderCredentials::new(None, key.map(String::from));
        GenerateImageHandler::new(client, Arc::new(creds))
    }

    fn command(prompt: &str) -> GenerateImage {
        GenerateImage {
            prompt: prompt.to_string(),
            width: 512,
            height: 768,
        }
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let client = Arc::new(FakeImageClient::returning_url("http://x/y.png"));
        let err = handler(client.clone(), None)
            .handle(command("hero jumping"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ConfigurationError(ref m) if m.contains("FAL.ai API key required")));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_returns_first_url_and_full_prompt() {
        let client = Arc::new(FakeImageClient::returning_url("http://x/y.png"));
        let result = handler(client.clone(), Some("fal-key"))
            .handle(command("hero jumping"))
            .await
            .unwrap();

        assert_eq!(result.image_url, "http://x/y.png");
        assert!(result.prompt_used.starts_with(MANGA_STYLE_PREFIX));
        assert!(result.prompt_used.contains("hero jumping"));

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].api_key, "fal-key");
        assert_eq!(calls[0].request.prompt, result.prompt_used);
        assert_eq!(calls[0].request.negative_prompt, MANGA_NEGATIVE_PROMPT);
        assert_eq!(calls[0].request.num_inference_steps, 25);
        assert_eq!(calls[0].request.guidance_scale, 7.5);
        assert_eq!(calls[0].request.num_images, 1);
        assert_eq!(calls[0].request.size, ImageSize::new(512, 768).unwrap());
    }

    #[tokio::test]
    async fn test_zero_size_is_rejected() {
        let client = Arc::new(FakeImageClient::returning_url("http://x/y.png"));
        let err = handler(client.clone(), Some("k"))
            .handle(GenerateImage {
                prompt: "cat".to_string(),
                width: 0,
                height: 768,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_status_is_preserved() {
        let client = Arc::new(FakeImageClient::new(FakeImageReply::Upstream {
            status: 422,
            body: "bad size".to_string(),
        }));
        let err = handler(client, Some("k"))
            .handle(command("cat"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamError { status: 422, ref body } if body == "bad size"));
    }
}

//! Panel Prompt Handler

use std::sync::Arc;

use crate::application::commands::handlers::GROQ_KEY_REQUIRED;
use crate::application::commands::GenerateScenePrompts;
use crate::application::credentials::ProviderCredentials;
use crate::application::error::ApplicationError;
use crate::application::ports::{CompletionRequest, TextCompletionPort};
use crate::domain::manga::panel_prompts_prompt;
use crate::domain::parse_json_array;

const PROMPTS_TEMPERATURE: f32 = 0.8;
const PROMPTS_MAX_TOKENS: u32 = 3000;

/// 图像提示词响应
#[derive(Debug, Clone)]
pub struct ScenePromptsResponse {
    pub prompts: Vec<String>,
}

/// GenerateScenePrompts Handler
///
/// 只使用进程默认的 Groq key，不接受请求级覆盖
pub struct GenerateScenePromptsHandler {
    text_engine: Arc<dyn TextCompletionPort>,
    credentials: Arc<ProviderCredentials>,
}

impl GenerateScenePromptsHandler {
    pub fn new(
        text_engine: Arc<dyn TextCompletionPort>,
        credentials: Arc<ProviderCredentials>,
    ) -> Self {
        Self {
            text_engine,
            credentials,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateScenePrompts,
    ) -> Result<ScenePromptsResponse, ApplicationError> {
        let api_key = self
            .credentials
            .groq_api_key()
            .ok_or_else(|| ApplicationError::configuration(GROQ_KEY_REQUIRED))?;

        let scene = command.scene;
        let request = CompletionRequest {
            prompt: panel_prompts_prompt(&scene),
            temperature: PROMPTS_TEMPERATURE,
            max_tokens: PROMPTS_MAX_TOKENS,
        };

        let reply = self
            .text_engine
            .complete(api_key, request)
            .await
            .map_err(ApplicationError::from_completion_error)?;
        let prompts: Vec<String> = parse_json_array(&reply)?;

        if prompts.len() != scene.panels as usize {
            // 模型不一定遵守数量要求，原样返回
            tracing::warn!(
                scene_id = scene.id,
                requested = scene.panels,
                received = prompts.len(),
                "Prompt count differs from panel count"
            );
        }

        tracing::info!(
            model = %self.text_engine.model(),
            scene_id = scene.id,
            prompt_count = prompts.len(),
            "Panel prompts generated"
        );

        Ok(ScenePromptsResponse { prompts })
    }
}

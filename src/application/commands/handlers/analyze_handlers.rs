//! Scene Analysis Handler

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::AnalyzeNovel;
use crate::application::credentials::ProviderCredentials;
use crate::application::error::ApplicationError;
use crate::application::ports::{CompletionRequest, TextCompletionPort};
use crate::domain::manga::scene_analysis_prompt;
use crate::domain::parse_json_array;

/// 缺少 Groq key 时的提示
pub const GROQ_KEY_REQUIRED: &str = "Groq API key required. Sign up free at groq.com";

const ANALYZE_TEMPERATURE: f32 = 0.7;
const ANALYZE_MAX_TOKENS: u32 = 4000;

/// 场景拆分响应
///
/// 场景按模型返回的 JSON 原样透传，不经过 `Scene` 重新序列化
#[derive(Debug, Clone)]
pub struct AnalyzeNovelResponse {
    pub scenes: Vec<Value>,
}

impl AnalyzeNovelResponse {
    pub fn count(&self) -> usize {
        self.scenes.len()
    }
}

/// AnalyzeNovel Handler
pub struct AnalyzeNovelHandler {
    text_engine: Arc<dyn TextCompletionPort>,
    credentials: Arc<ProviderCredentials>,
}

impl AnalyzeNovelHandler {
    pub fn new(
        text_engine: Arc<dyn TextCompletionPort>,
        credentials: Arc<ProviderCredentials>,
    ) -> Self {
        Self {
            text_engine,
            credentials,
        }
    }

    pub async fn handle(&self, command: AnalyzeNovel) -> Result<AnalyzeNovelResponse, ApplicationError> {
        let api_key = self
            .credentials
            .resolve_groq_key(command.api_key_override.as_deref())
            .ok_or_else(|| ApplicationError::configuration(GROQ_KEY_REQUIRED))?;

        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Novel text cannot be empty"));
        }

        let request = CompletionRequest {
            prompt: scene_analysis_prompt(&command.text),
            temperature: ANALYZE_TEMPERATURE,
            max_tokens: ANALYZE_MAX_TOKENS,
        };

        let reply = self
            .text_engine
            .complete(api_key, request)
            .await
            .map_err(ApplicationError::from_completion_error)?;
        let scenes: Vec<Value> = parse_json_array(&reply)?;

        tracing::info!(
            model = %self.text_engine.model(),
            text_len = command.text.len(),
            scene_count = scenes.len(),
            "Novel analyzed"
        );

        Ok(AnalyzeNovelResponse { scenes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{FakeTextClient, FakeTextReply};
    use serde_json::json;

    fn handler(client: Arc<FakeTextClient>, default_key: Option<&str>) -> AnalyzeNovelHandler {
        let creds = ProviderCredentials::new(default_key.map(String::from), None);
        AnalyzeNovelHandler::new(client, Arc::new(creds))
    }

    fn command(text: &str, key: Option<&str>) -> AnalyzeNovel {
        AnalyzeNovel {
            text: text.to_string(),
            api_key_override: key.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let client = Arc::new(FakeTextClient::replying("[]"));
        let err = handler(client.clone(), None)
            .handle(command("Once upon a time", None))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::ConfigurationError(ref m) if m.contains("Groq API key required")));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_returns_scenes_unchanged_with_count() {
        let scenes = json!([
            {
                "id": 1, "type": "action", "panels": 2,
                "characters": ["Hero"], "description": "A leap",
                "dialogue": ["Hero: Now!"], "shot": "wide", "emotion": "tense"
            },
            {
                "id": 2, "type": "reaction", "panels": 1,
                "characters": ["Villain"], "description": "A sneer",
                "dialogue": [], "shot": "close-up", "emotion": "smug",
                "extra": "kept"
            }
        ]);
        let reply = format!("Sure! Here you go:\n{}\nEnjoy.", scenes);
        let client = Arc::new(FakeTextClient::replying(reply));

        let result = handler(client, Some("default"))
            .handle(command("The hero leapt.", None))
            .await
            .unwrap();

        assert_eq!(result.count(), 2);
        assert_eq!(Value::Array(result.scenes), scenes);
    }

    #[tokio::test]
    async fn test_override_key_is_used() {
        let client = Arc::new(FakeTextClient::replying("[]"));
        handler(client.clone(), Some("default"))
            .handle(command("text", Some("per-request")))
            .await
            .unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].api_key, "per-request");
        assert_eq!(calls[0].request.temperature, 0.7);
        assert_eq!(calls[0].request.max_tokens, 4000);
        assert!(calls[0].request.prompt.contains("Novel text:\ntext"));
    }

    #[tokio::test]
    async fn test_override_without_default() {
        let client = Arc::new(FakeTextClient::replying("[]"));
        let result = handler(client, None)
            .handle(command("text", Some("mine")))
            .await
            .unwrap();
        assert_eq!(result.count(), 0);
    }

    #[tokio::test]
    async fn test_reply_without_array_is_parse_error() {
        let client = Arc::new(FakeTextClient::replying("I cannot do that."));
        let err = handler(client, Some("k"))
            .handle(command("text", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let client = Arc::new(FakeTextClient::replying("[]"));
        let err = handler(client.clone(), Some("k"))
            .handle(command("   ", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_timeout_is_external_error() {
        let client = Arc::new(FakeTextClient::new(FakeTextReply::Timeout));
        let err = handler(client, Some("k"))
            .handle(command("text", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalServiceError(_)));
    }
}

//! Groq Client - 调用 Groq 聊天补全接口
//!
//! 实现 TextCompletionPort trait（OpenAI 兼容协议）
//!
//! 外部 API:
//! POST https://api.groq.com/openai/v1/chat/completions
//! Header: Authorization: Bearer <key>
//! Request: {"model": "...", "messages": [{"role": "user", "content": "..."}], "temperature": 0.7, "max_tokens": 4000}
//! Response: {"choices": [{"message": {"role": "assistant", "content": "..."}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{CompletionRequest, ProviderError, TextCompletionPort};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// 补全请求体
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Groq 客户端配置
#[derive(Debug, Clone)]
pub struct GroqClientConfig {
    /// API 基础 URL（不含 /chat/completions）
    pub base_url: String,
    /// 模型标识
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GroqClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GroqClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Groq 客户端
pub struct GroqClient {
    client: Client,
    config: GroqClientConfig,
}

impl GroqClient {
    pub fn new(config: GroqClientConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextCompletionPort for GroqClient {
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<String, ProviderError> {
        let body = ChatCompletionBody {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
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

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to decode completion: {}", e)))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("Completion has no content".to_string()))?;

        tracing::debug!(reply_len = content.len(), "Chat completion received");

        Ok(content.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

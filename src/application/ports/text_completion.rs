//! Text Completion Port - 文本补全服务抽象
//!
//! 聊天式补全接口：单条 user 消息进，自由文本出。具体实现在 infrastructure/adapters 层

use async_trait::async_trait;

use super::provider::ProviderError;

/// 补全请求
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// 作为 user 消息发送的提示词
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text Completion Port
///
/// API key 随每次调用传入，以支持按请求覆盖默认 key
#[async_trait]
pub trait TextCompletionPort: Send + Sync {
    /// 返回模型回复的原始文本
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<String, ProviderError>;

    /// 使用的模型标识（用于日志）
    fn model(&self) -> &str;
}

//! Fake Text Client - 用于测试的文本补全客户端
//!
//! 返回预设回复并记录每次调用，不访问网络

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CompletionRequest, ProviderError, TextCompletionPort};

/// 预设回复
#[derive(Debug, Clone)]
pub enum FakeTextReply {
    Text(String),
    Upstream { status: u16, body: String },
    Timeout,
}

/// 一次被记录的调用
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub api_key: String,
    pub request: CompletionRequest,
}

/// Fake Text Client
pub struct FakeTextClient {
    reply: FakeTextReply,
    calls: Mutex<Vec<RecordedCompletion>>,
}

impl FakeTextClient {
    pub fn new(reply: FakeTextReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 总是返回给定文本
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(FakeTextReply::Text(text.into()))
    }

    /// 已记录的调用
    pub fn calls(&self) -> Vec<RecordedCompletion> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl TextCompletionPort for FakeTextClient {
    async fn complete(
        &self,
        api_key: &str,
        request: CompletionRequest,
    ) -> Result<String, ProviderError> {
        tracing::debug!(
            prompt_len = request.prompt.len(),
            "FakeTextClient: returning canned reply"
        );

        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCompletion {
                api_key: api_key.to_string(),
                request,
            });

        match &self.reply {
            FakeTextReply::Text(text) => Ok(text.clone()),
            FakeTextReply::Upstream { status, body } => Err(ProviderError::UpstreamStatus {
                status: *status,
                body: body.clone(),
            }),
            FakeTextReply::Timeout => Err(ProviderError::Timeout),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

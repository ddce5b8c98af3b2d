//! Fake Image Client - 用于测试的图像生成客户端

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{GeneratedImage, ImageGenerationPort, ImageRequest, ProviderError};

/// 预设结果
#[derive(Debug, Clone)]
pub enum FakeImageReply {
    Url(String),
    Upstream { status: u16, body: String },
}

/// 一次被记录的调用
#[derive(Debug, Clone)]
pub struct RecordedImageCall {
    pub api_key: String,
    pub request: ImageRequest,
}

/// Fake Image Client
///
/// 始终返回配置的 URL（或错误），并记录收到的请求
pub struct FakeImageClient {
    reply: FakeImageReply,
    calls: Mutex<Vec<RecordedImageCall>>,
}

impl FakeImageClient {
    pub fn new(reply: FakeImageReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning_url(url: impl Into<String>) -> Self {
        Self::new(FakeImageReply::Url(url.into()))
    }

    pub fn calls(&self) -> Vec<RecordedImageCall> {
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
impl ImageGenerationPort for FakeImageClient {
    async fn generate(
        &self,
        api_key: &str,
        request: ImageRequest,
    ) -> Result<GeneratedImage, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedImageCall {
                api_key: api_key.to_string(),
                request,
            });

        match &self.reply {
            FakeImageReply::Url(url) => Ok(GeneratedImage { url: url.clone() }),
            FakeImageReply::Upstream { status, body } => Err(ProviderError::UpstreamStatus {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

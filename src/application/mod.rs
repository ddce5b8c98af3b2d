//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 外部生成服务端口（TextCompletion、ImageGeneration）
//! - commands: 场景拆分 / 提示词生成 / 图像生成
//! - queries: 服务状态
//! - credentials: 进程级默认 API key
//! - error: 应用层错误定义

pub mod commands;
pub mod credentials;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    AnalyzeNovel, GenerateImage, GenerateScenePrompts,
    // Handlers
    handlers::{
        AnalyzeNovelHandler, AnalyzeNovelResponse, GenerateImageHandler, GenerateImageResponse,
        GenerateScenePromptsHandler, ScenePromptsResponse, FAL_KEY_REQUIRED, GROQ_KEY_REQUIRED,
    },
};

pub use credentials::ProviderCredentials;
pub use error::ApplicationError;

pub use ports::{
    CompletionRequest, GeneratedImage, ImageGenerationPort, ImageRequest, ProviderError,
    TextCompletionPort,
};

pub use queries::{
    GetServiceStatus,
    handlers::{GetServiceStatusHandler, ServiceStatus},
};

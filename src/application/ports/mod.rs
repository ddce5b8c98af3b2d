//! Application Ports - 出站端口定义
//!
//! 定义应用层与外部生成服务之间的抽象接口

mod image_generation;
mod provider;
mod text_completion;

pub use image_generation::{GeneratedImage, ImageGenerationPort, ImageRequest};
pub use provider::ProviderError;
pub use text_completion::{CompletionRequest, TextCompletionPort};

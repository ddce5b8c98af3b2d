//! Application State
//!
//! 所有请求共享的只读状态：端口实现、默认凭证、各 Command/Query Handler

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AnalyzeNovelHandler, GenerateImageHandler, GenerateScenePromptsHandler,
    // Query handlers
    GetServiceStatusHandler,
    // Ports
    ImageGenerationPort, ProviderCredentials, TextCompletionPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub text_engine: Arc<dyn TextCompletionPort>,
    pub image_engine: Arc<dyn ImageGenerationPort>,
    pub credentials: Arc<ProviderCredentials>,

    // ========== Command Handlers ==========
    pub analyze_novel_handler: AnalyzeNovelHandler,
    pub generate_prompts_handler: GenerateScenePromptsHandler,
    pub generate_image_handler: GenerateImageHandler,

    // ========== Query Handlers ==========
    pub service_status_handler: GetServiceStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        text_engine: Arc<dyn TextCompletionPort>,
        image_engine: Arc<dyn ImageGenerationPort>,
        credentials: ProviderCredentials,
    ) -> Self {
        let credentials = Arc::new(credentials);

        Self {
            // Ports
            text_engine: text_engine.clone(),
            image_engine: image_engine.clone(),
            credentials: credentials.clone(),

            // Command handlers
            analyze_novel_handler: AnalyzeNovelHandler::new(
                text_engine.clone(),
                credentials.clone(),
            ),
            generate_prompts_handler: GenerateScenePromptsHandler::new(
                text_engine.clone(),
                credentials.clone(),
            ),
            generate_image_handler: GenerateImageHandler::new(
                image_engine.clone(),
                credentials.clone(),
            ),

            // Query handlers
            service_status_handler: GetServiceStatusHandler::new(credentials.clone()),
        }
    }
}

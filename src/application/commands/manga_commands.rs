//! Manga Commands

use crate::domain::manga::Scene;

/// 拆分小说文本为分镜场景
#[derive(Debug, Clone)]
pub struct AnalyzeNovel {
    pub text: String,
    /// 请求级 Groq key，优先于进程默认值
    pub api_key_override: Option<String>,
}

/// 为单个场景生成图像提示词
#[derive(Debug, Clone)]
pub struct GenerateScenePrompts {
    pub scene: Scene,
}

/// 生成分镜图像
#[derive(Debug, Clone)]
pub struct GenerateImage {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

//! Manga Context - 漫画分镜上下文
//!
//! 职责:
//! - 分镜场景值对象
//! - 文本/图像模型的提示词模板

mod templates;
mod value_objects;

pub use templates::{
    manga_image_prompt, panel_prompts_prompt, scene_analysis_prompt, MANGA_NEGATIVE_PROMPT,
    MANGA_STYLE_PREFIX,
};
pub use value_objects::{ImageSize, Scene, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};

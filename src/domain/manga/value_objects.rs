//! Manga Context - Value Objects

use serde::{Deserialize, Serialize};

/// 默认画幅宽度
pub const DEFAULT_IMAGE_WIDTH: u32 = 512;

/// 默认画幅高度（竖版分镜）
pub const DEFAULT_IMAGE_HEIGHT: u32 = 768;

/// 分镜场景
///
/// 由文本模型生成，除 JSON 结构外不做校验（`panels` 约定为 1–4）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: i64,
    /// 场景类型：action / dialogue / reaction / climax / internal
    #[serde(rename = "type")]
    pub scene_type: String,
    pub panels: u32,
    pub characters: Vec<String>,
    pub description: String,
    pub dialogue: Vec<String>,
    /// 镜头：close-up / medium / wide / extreme-close-up
    pub shot: String,
    pub emotion: String,
}

/// 输出图像尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, &'static str> {
        if width == 0 || height == 0 {
            return Err("Image width and height must be greater than 0");
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_uses_type_on_the_wire() {
        let json = r#"{
            "id": 1,
            "type": "action",
            "panels": 2,
            "characters": ["Hero", "Villain"],
            "description": "Epic battle scene",
            "dialogue": ["Hero: I won't give up!"],
            "shot": "wide",
            "emotion": "intense"
        }"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.scene_type, "action");
        assert_eq!(scene.panels, 2);

        let back = serde_json::to_value(&scene).unwrap();
        assert_eq!(back["type"], "action");
        assert!(back.get("scene_type").is_none());
    }

    #[test]
    fn test_image_size_rejects_zero() {
        assert!(ImageSize::new(0, 768).is_err());
        assert!(ImageSize::new(512, 0).is_err());
        assert_eq!(ImageSize::new(640, 960).unwrap().to_string(), "640x960");
    }

    #[test]
    fn test_image_size_default() {
        let size = ImageSize::default();
        assert_eq!(size.width(), 512);
        assert_eq!(size.height(), 768);
    }
}

//! Prompt Templates
//!
//! 发给文本模型和图像模型的固定提示词模板

use super::value_objects::Scene;

/// 追加在用户提示词前面的漫画风格描述
pub const MANGA_STYLE_PREFIX: &str = "manga panel, black and white, ink drawing, professional manga art, \
high contrast, screen tones, detailed linework, ";

/// 图像生成的反向提示词
pub const MANGA_NEGATIVE_PROMPT: &str = "color, colored, photorealistic, 3d render, blurry, \
low quality, bad anatomy, western comic style, watermark";

/// 场景拆分提示词
pub fn scene_analysis_prompt(novel_text: &str) -> String {
    format!(
        r#"Analyze this novel excerpt and break it into manga scenes.

For each scene provide:
1. Scene type (action/dialogue/reaction/climax/internal)
2. Number of panels needed (1-4)
3. Characters present
4. Visual description for each panel
5. Dialogue lines
6. Camera shot (close-up/medium/wide/extreme-close-up)
7. Primary emotion/intensity

Return ONLY a valid JSON array with this structure:
[
  {{
    "id": 1,
    "type": "action",
    "panels": 2,
    "characters": ["Character1", "Character2"],
    "description": "Detailed visual description of what happens",
    "dialogue": ["Character1: Quote", "Character2: Quote"],
    "shot": "wide",
    "emotion": "shock"
  }}
]

Novel text:
{novel_text}

Remember: Return ONLY the JSON array, no markdown formatting, no explanations."#
    )
}

/// 分镜图像提示词生成提示词
///
/// 要求模型按 `scene.panels` 返回等量的提示词字符串数组
pub fn panel_prompts_prompt(scene: &Scene) -> String {
    format!(
        r#"Create {panels} detailed manga panel image generation prompts for this scene.

Scene Details:
- Type: {scene_type}
- Characters: {characters}
- Description: {description}
- Camera Shot: {shot}
- Emotion: {emotion}
- Dialogue: {dialogue}

For EACH panel, create a detailed prompt that includes:
1. Manga art style specifications (black and white, ink, screen tones)
2. Specific character poses, expressions, and positions
3. Background elements and setting details
4. Visual effects (speed lines, impact effects, motion blur, etc.)
5. Camera angle and framing
6. Emotional atmosphere

Return ONLY a valid JSON array of strings:
["Detailed prompt for panel 1...", "Detailed prompt for panel 2...", ...]

Each prompt should be 100-200 words and extremely detailed for accurate image generation."#,
        panels = scene.panels,
        scene_type = scene.scene_type,
        characters = scene.characters.join(", "),
        description = scene.description,
        shot = scene.shot,
        emotion = scene.emotion,
        dialogue = scene.dialogue.join(", "),
    )
}

/// 带漫画风格前缀的最终图像提示词
pub fn manga_image_prompt(prompt: &str) -> String {
    format!("{MANGA_STYLE_PREFIX}{prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scene() -> Scene {
        Scene {
            id: 3,
            scene_type: "climax".to_string(),
            panels: 4,
            characters: vec!["Aiko".to_string(), "Ren".to_string()],
            description: "Rooftop confrontation in the rain".to_string(),
            dialogue: vec!["Aiko: Stop!".to_string(), "Ren: Never.".to_string()],
            shot: "extreme-close-up".to_string(),
            emotion: "despair".to_string(),
        }
    }

    #[test]
    fn test_scene_analysis_prompt_embeds_text() {
        let prompt = scene_analysis_prompt("The sword fell.");
        assert!(prompt.contains("Novel text:\nThe sword fell.\n"));
        assert!(prompt.contains("\"type\": \"action\""));
        assert!(prompt.ends_with("no markdown formatting, no explanations."));
    }

    #[test]
    fn test_panel_prompts_prompt_lists_scene_details() {
        let prompt = panel_prompts_prompt(&sample_scene());
        assert!(prompt.starts_with("Create 4 detailed manga panel"));
        assert!(prompt.contains("- Type: climax"));
        assert!(prompt.contains("- Characters: Aiko, Ren"));
        assert!(prompt.contains("- Camera Shot: extreme-close-up"));
        assert!(prompt.contains("- Dialogue: Aiko: Stop!, Ren: Never."));
    }

    #[test]
    fn test_manga_image_prompt_prefixes_style() {
        let full = manga_image_prompt("hero jumping");
        assert!(full.starts_with("manga panel, black and white"));
        assert!(full.ends_with("detailed linework, hero jumping"));
    }
}

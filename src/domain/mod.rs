//! Domain Layer - 领域层
//!
//! - Manga Context: 分镜场景与提示词模板
//! - JSON 数组提取（模型回复解析）

pub mod manga;

mod json_array;

pub use json_array::{extract_json_array, parse_json_array, JsonArrayError};

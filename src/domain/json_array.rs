//! JSON 数组提取器
//!
//! 文本模型的回复是自由文本，JSON 数组嵌在其中。
//! 约定：取第一个 `[` 到最后一个 `]` 之间（含）的子串作为数组。
//! 所有调用点都经过这里，将来换成结构化输出时只需替换本模块。

use serde::de::DeserializeOwned;
use thiserror::Error;

/// 提取/解析错误
#[derive(Debug, Error)]
pub enum JsonArrayError {
    #[error("No JSON array found in response")]
    NotFound,

    #[error("Invalid JSON array: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// 取第一个 `[` 到最后一个 `]` 的子串
///
/// 找不到括号对（或 `]` 在 `[` 之前）时返回 `JsonArrayError::NotFound`
pub fn extract_json_array(text: &str) -> Result<&str, JsonArrayError> {
    let start = text.find('[').ok_or(JsonArrayError::NotFound)?;
    let end = text.rfind(']').ok_or(JsonArrayError::NotFound)?;
    if end < start {
        return Err(JsonArrayError::NotFound);
    }
    // '[' 和 ']' 都是单字节，切片边界一定落在字符边界上
    Ok(&text[start..=end])
}

/// 提取并反序列化为 `Vec<T>`
pub fn parse_json_array<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, JsonArrayError> {
    let json = extract_json_array(text.trim())?;
    Ok(serde_json::from_str(json)?)
}

//! Groq Adapter - 文本补全客户端实现

mod groq_client;

pub use groq_client::*;

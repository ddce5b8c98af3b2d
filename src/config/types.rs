//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本模型（Groq）配置
    #[serde(default)]
    pub groq: GroqConfig,

    /// 图像模型（FAL.ai）配置
    #[serde(default)]
    pub fal: FalConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Groq 配置
#[derive(Debug, Clone, Deserialize)]
pub struct GroqConfig {
    /// 默认 API key，未配置时只能通过请求级 key 调用场景拆分
    #[serde(default)]
    pub api_key: Option<String>,

    /// API 基础 URL
    #[serde(default = "default_groq_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_groq_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_groq_timeout")]
    pub timeout_secs: u64,
}

fn default_groq_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "mixtral-8x7b-32768".to_string()
}

fn default_groq_timeout() -> u64 {
    120
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_groq_url(),
            model: default_groq_model(),
            timeout_secs: default_groq_timeout(),
        }
    }
}

/// FAL.ai 配置
#[derive(Debug, Clone, Deserialize)]
pub struct FalConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_fal_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_fal_timeout")]
    pub timeout_secs: u64,
}

fn default_fal_url() -> String {
    "https://fal.run".to_string()
}

fn default_fal_timeout() -> u64 {
    60
}

impl Default for FalConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_fal_url(),
            timeout_secs: default_fal_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.groq.model, "mixtral-8x7b-32768");
        assert_eq!(config.fal.timeout_secs, 60);
        assert!(config.groq.api_key.is_none());
        assert!(config.fal.api_key.is_none());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }
}

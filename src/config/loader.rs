//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 服务商约定的环境变量（GROQ_API_KEY、FAL_API_KEY、PORT）
//! 2. 带前缀的环境变量（NOVEL2MANGA_）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::application::credentials::non_empty;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "NOVEL2MANGA";

/// 加载应用配置
///
/// # 环境变量示例
/// - `GROQ_API_KEY=gsk_...`
/// - `FAL_API_KEY=...`
/// - `PORT=8080`
/// - `NOVEL2MANGA_GROQ__MODEL=llama3-70b-8192`
/// - `NOVEL2MANGA_FAL__TIMEOUT_SECS=90`
/// - `NOVEL2MANGA_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(None, std::env::vars().collect())
}

/// 从指定配置文件和环境变量表加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，为 None 时搜索默认文件名
/// - `env` - 环境变量表（测试时可传入自定义表）
pub fn load_config_from(
    config_path: Option<&Path>,
    env: Map<String, String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("groq.base_url", "https://api.groq.com/openai/v1")?
        .set_default("groq.model", "mixtral-8x7b-32768")?
        .set_default("groq.timeout_secs", 120)?
        .set_default("fal.base_url", "https://fal.run")?
        .set_default("fal.timeout_secs", 60)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀的环境变量
    // 层级分隔符: __ (双下划线)，例如 NOVEL2MANGA_GROQ__BASE_URL
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 服务商约定的变量名（最高优先级）
    builder = builder
        .set_override_option("groq.api_key", env.get("GROQ_API_KEY").cloned())?
        .set_override_option("fal.api_key", env.get("FAL_API_KEY").cloned())?
        .set_override_option("server.port", env.get("PORT").cloned())?;

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 空字符串视为未配置
    app_config.groq.api_key = non_empty(app_config.groq.api_key);
    app_config.fal.api_key = non_empty(app_config.fal.api_key);

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.groq.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Groq base URL cannot be empty".to_string(),
        ));
    }

    if config.groq.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "Groq model cannot be empty".to_string(),
        ));
    }

    if config.fal.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "FAL base URL cannot be empty".to_string(),
        ));
    }

    if config.groq.timeout_secs == 0 || config.fal.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Provider timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出 key 本身
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Groq URL: {}", config.groq.base_url);
    tracing::info!("Groq Model: {}", config.groq.model);
    tracing::info!("Groq Timeout: {}s", config.groq.timeout_secs);
    tracing::info!("Groq API Key: {}", configured(&config.groq.api_key));
    tracing::info!("FAL URL: {}", config.fal.base_url);
    tracing::info!("FAL Timeout: {}s", config.fal.timeout_secs);
    tracing::info!("FAL API Key: {}", configured(&config.fal.api_key));
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

fn configured(key: &Option<String>) -> &'static str {
    if key.is_some() {
        "configured"
    } else {
        "not configured"
    }
}

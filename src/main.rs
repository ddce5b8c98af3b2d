//! novel2manga - 小说转漫画分镜服务

use std::sync::Arc;

use novel2manga::application::ProviderCredentials;
use novel2manga::config::{load_config, print_config};
use novel2manga::infrastructure::adapters::{
    FalClient, FalClientConfig, GroqClient, GroqClientConfig,
};
use novel2manga::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},novel2manga={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("novel2manga - Novel to Manga API");
    print_config(&config);

    if config.groq.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY not set: /api/analyze requires a per-request key, /api/generate-prompts is disabled");
    }
    if config.fal.api_key.is_none() {
        tracing::warn!("FAL_API_KEY not set: /api/generate-image is disabled");
    }

    // 创建外部服务客户端
    let groq_config = GroqClientConfig::new(config.groq.base_url.clone())
        .with_model(config.groq.model.clone())
        .with_timeout(config.groq.timeout_secs);
    let text_engine = Arc::new(GroqClient::new(groq_config)?);

    let fal_config =
        FalClientConfig::new(config.fal.base_url.clone()).with_timeout(config.fal.timeout_secs);
    let image_engine = Arc::new(FalClient::new(fal_config)?);

    let credentials =
        ProviderCredentials::new(config.groq.api_key.clone(), config.fal.api_key.clone());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(text_engine, image_engine, credentials);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

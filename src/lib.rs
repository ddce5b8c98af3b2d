//! novel2manga - 小说转漫画分镜服务
//!
//! 架构设计: Hexagonal Architecture，无状态地编排两个外部生成服务
//!
//! 领域层 (domain/):
//! - Manga Context: 分镜场景、提示词模板
//! - JSON 数组提取
//!
//! 应用层 (application/):
//! - Ports: TextCompletionPort, ImageGenerationPort
//! - Commands: 场景拆分、提示词生成、图像生成
//! - Queries: 服务状态
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Groq / FAL.ai 客户端
//! - HTTP: RESTful API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! 应用层 - 命令
//!
//! 每个命令对应一次外部生成服务调用

mod manga_commands;

pub mod handlers;

pub use manga_commands::*;

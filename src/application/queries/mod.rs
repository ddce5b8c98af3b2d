//! 应用层 - 查询（只读，无外部调用）

mod status_queries;

pub mod handlers;

pub use status_queries::*;

//! FAL Adapter - 图像生成客户端实现

mod fal_client;

pub use fal_client::*;

//! Command Handlers 实现

mod analyze_handlers;
mod image_handlers;
mod prompt_handlers;

pub use analyze_handlers::*;
pub use image_handlers::*;
pub use prompt_handlers::*;

//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fake;
pub mod fal;
pub mod groq;

pub use fake::*;
pub use fal::*;
pub use groq::*;

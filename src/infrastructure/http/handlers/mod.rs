//! HTTP Handlers

mod health;
mod manga;

pub use health::*;
pub use manga::*;

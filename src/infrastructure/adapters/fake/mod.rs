//! Fake Adapters - 不访问网络的端口实现

mod fake_image_client;
mod fake_text_client;

pub use fake_image_client::{FakeImageClient, FakeImageReply, RecordedImageCall};
pub use fake_text_client::{FakeTextClient, FakeTextReply, RecordedCompletion};

pub mod codec;
pub mod media_info;
pub mod task;

pub use codec::CodecSupport;
pub use media_info::MediaInfo;
pub use task::{TaskRecord, TaskStatus};

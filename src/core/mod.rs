pub mod player;
pub mod prober;
pub mod tracker;

pub use player::{PlaybackController, PlayerOptions};
pub use prober::CodecProber;
pub use tracker::TaskTracker;

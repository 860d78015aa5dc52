use serde::Serialize;

/// Best-effort read-out of the media element's track metadata.
/// Recomputed wholesale every time metadata loads; fields the element does
/// not report stay at "Unknown". Not authoritative.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MediaInfo {
    pub video_codec: String,
    pub audio_codec: String,
    pub resolution: String,
    pub frame_rate: String,
    pub bitrate: String,
    pub audio_channels: String,
}

pub const UNKNOWN: &str = "Unknown";

impl Default for MediaInfo {
    fn default() -> Self {
        Self {
            video_codec: UNKNOWN.to_string(),
            audio_codec: UNKNOWN.to_string(),
            resolution: UNKNOWN.to_string(),
            frame_rate: UNKNOWN.to_string(),
            bitrate: UNKNOWN.to_string(),
            audio_channels: UNKNOWN.to_string(),
        }
    }
}

impl MediaInfo {
    /// Bitrate estimate from the cumulative decoded-byte counter divided by
    /// the total duration. Inaccurate for variable bitrate streams or when
    /// only part of the stream has been decoded.
    pub fn estimate_bitrate(decoded_bytes: u64, duration_secs: f64) -> String {
        if duration_secs <= 0.0 || decoded_bytes == 0 {
            return UNKNOWN.to_string();
        }
        let bits_per_sec = (decoded_bytes as f64 * 8.0) / duration_secs;
        format!("{} kbps", (bits_per_sec / 1000.0).round() as u64)
    }
}

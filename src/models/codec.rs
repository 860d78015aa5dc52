use serde::Serialize;

/// Result of one codec capability probe run.
/// `supported` keeps the probe order of the source list; the two class
/// flags cover the multichannel audio families.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CodecSupport {
    pub supported: Vec<String>,
    pub ac3_supported: bool,
    pub eac3_supported: bool,
}

impl CodecSupport {
    pub fn multichannel_audio_available(&self) -> bool {
        self.ac3_supported || self.eac3_supported
    }
}

//! Audio pipeline capability used by the software-decoder fallback.
//!
//! The fallback installs a passthrough stage that copies samples unchanged;
//! it performs no decoding and exists only so a multichannel stream still
//! has a constructed audio path on runtimes without AC-3/E-AC-3 support.

use crate::errors::{AppError, AppResult};

/// One processing stage in an audio pipeline.
pub trait AudioStage {
    fn buffer_size(&self) -> usize;
    fn channels(&self) -> usize;
    /// Process one buffer: `input` and `output` hold `channels()` planes of
    /// `buffer_size()` samples each.
    fn process(&mut self, input: &[Vec<f32>], output: &mut [Vec<f32>]);
}

/// Builds audio stages. Absent on runtimes without an audio subsystem, in
/// which case construction fails and the caller downgrades to a logged
/// warning.
pub trait AudioBackend {
    fn create_passthrough(&self, buffer_size: usize, channels: usize)
    -> AppResult<Box<dyn AudioStage>>;
}

/// Same-in/same-out sample copy. Intentionally inert scaffolding.
pub struct PassthroughStage {
    buffer_size: usize,
    channels: usize,
}

impl PassthroughStage {
    pub fn new(buffer_size: usize, channels: usize) -> Self {
        Self {
            buffer_size,
            channels,
        }
    }
}

impl AudioStage for PassthroughStage {
    fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn channels(&self) -> usize {
        self.channels
    }

    fn process(&mut self, input: &[Vec<f32>], output: &mut [Vec<f32>]) {
        for (plane_in, plane_out) in input.iter().zip(output.iter_mut()) {
            let n = plane_in.len().min(plane_out.len());
            plane_out[..n].copy_from_slice(&plane_in[..n]);
        }
    }
}

/// Backend that always succeeds, handing out passthrough stages.
#[derive(Debug, Default)]
pub struct InProcessAudioBackend;

impl AudioBackend for InProcessAudioBackend {
    fn create_passthrough(
        &self,
        buffer_size: usize,
        channels: usize,
    ) -> AppResult<Box<dyn AudioStage>> {
        Ok(Box::new(PassthroughStage::new(buffer_size, channels)))
    }
}

/// Backend standing in for a runtime without an audio subsystem.
#[derive(Debug, Default)]
pub struct UnavailableAudioBackend;

impl AudioBackend for UnavailableAudioBackend {
    fn create_passthrough(&self, _: usize, _: usize) -> AppResult<Box<dyn AudioStage>> {
        Err(AppError::Other("audio subsystem unavailable".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_copies_every_channel_unchanged() {
        let mut stage = PassthroughStage::new(4, 2);
        let input = vec![vec![0.1, 0.2, 0.3, 0.4], vec![-0.5, 0.0, 0.5, 1.0]];
        let mut output = vec![vec![0.0; 4], vec![0.0; 4]];
        stage.process(&input, &mut output);
        assert_eq!(input, output);
    }

    #[test]
    fn passthrough_tolerates_short_output_plane() {
        let mut stage = PassthroughStage::new(4, 1);
        let input = vec![vec![1.0, 2.0, 3.0, 4.0]];
        let mut output = vec![vec![0.0; 2]];
        stage.process(&input, &mut output);
        assert_eq!(output[0], vec![1.0, 2.0]);
    }
}

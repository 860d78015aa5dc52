//! Codec capability prober.
//!
//! Queries the runtime's type-support capability against a fixed built-in
//! codec list plus caller-supplied custom entries, and classifies
//! multichannel audio support into the AC-3 and E-AC-3 families. When
//! neither family is available it installs a passthrough audio stage as a
//! nominal software-decoder fallback; the stage copies samples unchanged
//! and is kept only for the lifetime of the current probe result.

use crate::errors::{AppError, AppResult};
use crate::models::CodecSupport;
use crate::platform::audio::{AudioBackend, AudioStage};
use crate::platform::support::TypeSupport;
use log::warn;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Built-in video probe list; custom entries are appended to this one.
pub const BUILTIN_VIDEO_TYPES: [&str; 3] = [
    "video/mp4; codecs=\"avc1.42E01E, mp4a.40.2\"",
    "video/webm; codecs=\"vp8, vorbis\"",
    "video/webm; codecs=\"vp9\"",
];

/// Built-in audio probe list. The first [`AC3_FAMILY_LEN`] entries form the
/// AC-3 family bucket, the rest the E-AC-3 family bucket.
pub const BUILTIN_AUDIO_TYPES: [&str; 6] = [
    "audio/mp4; codecs=\"ac-3\"",
    "audio/mp4; codecs=\"ec-3\"",
    "audio/mp4; codecs=\"mp4a.a5\"",
    "audio/mp4; codecs=\"mp4a.a6\"",
    "audio/mp4; codecs=\"ac-3.61.1\"",
    "audio/mp4; codecs=\"ec-3.61.2\"",
];

pub const AC3_FAMILY_LEN: usize = 2;

const FALLBACK_BUFFER_SIZE: usize = 4096;
const FALLBACK_CHANNELS: usize = 2;

pub struct CodecProber {
    support: Box<dyn TypeSupport>,
    audio: Box<dyn AudioBackend>,
    custom_codecs: Vec<String>,
    report: CodecSupport,
    fallback: Option<Box<dyn AudioStage>>,
}

impl CodecProber {
    pub fn new(
        support: Box<dyn TypeSupport>,
        audio: Box<dyn AudioBackend>,
        custom_codecs: Vec<String>,
    ) -> Self {
        Self {
            support,
            audio,
            custom_codecs,
            report: CodecSupport::default(),
            fallback: None,
        }
    }

    /// Run detection over the built-in lists plus the current custom
    /// entries. The supported set collects the video+custom list; the audio
    /// list feeds only the two family flags. When neither family is
    /// supported, the passthrough fallback is (re)built; its construction
    /// failure downgrades to a logged warning.
    pub fn detect(&mut self) -> AppResult<&CodecSupport> {
        if !self.support.is_available() {
            return Err(AppError::CodecInit(
                "type-support query unavailable on this runtime".to_string(),
            ));
        }

        // Re-probing always drops the previous fallback first.
        self.fallback = None;

        let mut supported = Vec::new();
        for t in BUILTIN_VIDEO_TYPES
            .iter()
            .map(|s| s.to_string())
            .chain(self.custom_codecs.iter().cloned())
        {
            if self.support.is_type_supported(&t) {
                supported.push(t);
            }
        }

        let ac3 = BUILTIN_AUDIO_TYPES[..AC3_FAMILY_LEN]
            .iter()
            .any(|t| self.support.is_type_supported(t));
        let eac3 = BUILTIN_AUDIO_TYPES[AC3_FAMILY_LEN..]
            .iter()
            .any(|t| self.support.is_type_supported(t));

        self.report = CodecSupport {
            supported,
            ac3_supported: ac3,
            eac3_supported: eac3,
        };

        if !self.report.multichannel_audio_available() {
            match self
                .audio
                .create_passthrough(FALLBACK_BUFFER_SIZE, FALLBACK_CHANNELS)
            {
                Ok(stage) => self.fallback = Some(stage),
                Err(e) => warn!("Software decoder initialization failed: {e}"),
            }
        }

        Ok(&self.report)
    }

    /// Append one validated custom codec string and re-run detection so the
    /// new entry participates in the recomputation.
    pub fn add_custom_codec(&mut self, codec: &str) -> AppResult<&CodecSupport> {
        let codec = codec.trim();
        if !codec_string_is_valid(codec) {
            return Err(AppError::InvalidCodecString(codec.to_string()));
        }
        self.custom_codecs.push(codec.to_string());
        self.detect()
    }

    /// Read one custom codec string from a text file and fold it into the
    /// probe list.
    pub fn upload_custom_codec(&mut self, path: &Path) -> AppResult<&CodecSupport> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::CodecUpload(format!("{}: {e}", path.display())))?;
        let codec = text.trim().to_string();
        if codec.is_empty() {
            return Err(AppError::CodecUpload(format!(
                "{}: file contains no codec string",
                path.display()
            )));
        }
        self.add_custom_codec(&codec)
    }

    pub fn report(&self) -> &CodecSupport {
        &self.report
    }

    pub fn custom_codecs(&self) -> &[String] {
        &self.custom_codecs
    }

    /// True when the inert passthrough fallback was constructed by the last
    /// probe run.
    pub fn has_software_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Shape check for container+codec MIME strings, e.g.
/// `audio/mp4; codecs="ec-3"`.
pub fn codec_string_is_valid(codec: &str) -> bool {
    // Compiled per call; probing runs once per mount, not in a hot path.
    let re = Regex::new(r#"(?i)^(audio|video)/[a-z0-9.+-]+\s*;\s*codecs="[^"]+"$"#)
        .expect("codec pattern is valid");
    re.is_match(codec)
}

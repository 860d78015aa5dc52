//! Media element and fullscreen surface abstractions.
//!
//! The playback controller never talks to a concrete runtime object; it
//! drives a `MediaElement` and drains its event queue. The scripted
//! implementation below models the parts of native element behavior the
//! controller depends on (position clamping, metadata, decoded-byte
//! counter) and is what the demo CLI and the tests run against.

use crate::errors::{AppError, AppResult};
use std::collections::VecDeque;

/// Track-level metadata as reported by the element once it has loaded
/// enough of the stream. Every field is optional; absent values render as
/// "Unknown" in the media-info snapshot.
#[derive(Debug, Clone, Default)]
pub struct TrackMetadata {
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub width: u32,
    pub height: u32,
    pub frame_rate: Option<f64>,
    pub audio_channels: Option<u32>,
}

/// Notifications the element pushes towards its owner. Mirrors the native
/// event set the controller subscribes to.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback position advanced; carries position and buffered end, in
    /// seconds.
    TimeUpdate { position: f64, buffered_end: f64 },
    /// Duration and track metadata became available.
    MetadataLoaded,
    /// The element failed to load or decode the stream.
    PlaybackError(String),
}

pub trait MediaElement {
    fn set_source(&mut self, url: &str);
    fn play(&mut self) -> AppResult<()>;
    fn pause(&mut self);
    fn position(&self) -> f64;
    /// Absolute seek. Implementations clamp to [0, duration] the way the
    /// native element does.
    fn set_position(&mut self, secs: f64);
    fn duration(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn buffered_end(&self) -> f64;
    /// Cumulative decoded byte counter, used for the bitrate estimate.
    fn decoded_bytes(&self) -> u64;
    fn metadata(&self) -> Option<TrackMetadata>;
    /// Drain one pending event, oldest first.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

/// Surface hosting the video output; fullscreen enter/exit delegate here.
pub trait VideoSurface {
    fn enter_fullscreen(&mut self) -> AppResult<()>;
    fn exit_fullscreen(&mut self) -> AppResult<()>;
    fn is_fullscreen(&self) -> bool;
}

/// In-process media element with scripted stream properties.
///
/// `load()` simulates the metadata-loaded notification for the configured
/// stream; `advance()` simulates decode progress while playing. Unknown or
/// empty sources produce a `PlaybackError` on load.
pub struct ScriptedMediaElement {
    source: String,
    playing: bool,
    position: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    buffered: f64,
    decoded: u64,
    metadata: Option<TrackMetadata>,
    byte_rate: u64,
    events: VecDeque<MediaEvent>,
}

impl ScriptedMediaElement {
    /// Element backed by a stream with the given duration and track
    /// metadata. `byte_rate` feeds the decoded-byte counter during
    /// `advance()`.
    pub fn new(duration: f64, metadata: TrackMetadata, byte_rate: u64) -> Self {
        Self {
            source: String::new(),
            playing: false,
            position: 0.0,
            duration,
            volume: 1.0,
            muted: false,
            buffered: 0.0,
            decoded: 0,
            metadata: Some(metadata),
            byte_rate,
            events: VecDeque::new(),
        }
    }

    /// Element whose every load fails with the given message.
    pub fn broken(message: &str) -> Self {
        let mut el = Self::new(0.0, TrackMetadata::default(), 0);
        el.metadata = None;
        el.events
            .push_back(MediaEvent::PlaybackError(message.to_string()));
        el
    }

    /// Simulate the stream becoming ready: queue the metadata notification
    /// and mark the first seconds as buffered.
    pub fn load(&mut self) {
        if self.metadata.is_none() {
            return;
        }
        self.buffered = (self.duration * 0.25).min(self.duration);
        self.events.push_back(MediaEvent::MetadataLoaded);
    }

    /// Simulate `secs` of playback: advance the position while playing,
    /// grow the buffered range and the decoded-byte counter, and queue a
    /// time-update notification.
    pub fn advance(&mut self, secs: f64) {
        if !self.playing {
            return;
        }
        self.position = (self.position + secs).min(self.duration);
        self.buffered = (self.position + self.duration * 0.25).min(self.duration);
        self.decoded += (secs * self.byte_rate as f64) as u64;
        self.events.push_back(MediaEvent::TimeUpdate {
            position: self.position,
            buffered_end: self.buffered,
        });
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl MediaElement for ScriptedMediaElement {
    fn set_source(&mut self, url: &str) {
        self.source = url.to_string();
        self.playing = false;
        self.position = 0.0;
        self.buffered = 0.0;
        self.decoded = 0;
        self.events.clear();
    }

    fn play(&mut self) -> AppResult<()> {
        if self.metadata.is_none() {
            return Err(AppError::Media("no playable stream".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        self.position = secs.clamp(0.0, self.duration);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn buffered_end(&self) -> f64 {
        self.buffered
    }

    fn decoded_bytes(&self) -> u64 {
        self.decoded
    }

    fn metadata(&self) -> Option<TrackMetadata> {
        self.metadata.clone()
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}

/// Surface that tracks the fullscreen flag without a windowing system.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    fullscreen: bool,
}

impl VideoSurface for HeadlessSurface {
    fn enter_fullscreen(&mut self) -> AppResult<()> {
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> AppResult<()> {
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

//! Playback controller.
//!
//! Owns one media resource reference and mirrors the state of the
//! underlying element rather than driving it independently: position and
//! buffered percentage refresh on time-update events, duration and the
//! media-info snapshot refresh on metadata-load events. Transport calls
//! delegate straight to the element and surface.

use crate::errors::{AppError, AppResult};
use crate::models::MediaInfo;
use crate::platform::media::{MediaElement, MediaEvent, VideoSurface};
use crate::utils::time::format_clock;

/// Controller knobs, usually filled in from the configuration.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub autoplay: bool,
    /// Relative skip step in seconds.
    pub skip_seconds: f64,
    pub initial_volume: f64,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            skip_seconds: 10.0,
            initial_volume: 1.0,
        }
    }
}

pub struct PlaybackController<E: MediaElement, S: VideoSurface> {
    element: E,
    surface: S,
    options: PlayerOptions,
    source: String,
    playing: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    fullscreen: bool,
    /// Buffered range as a percentage of the duration.
    buffered_pct: f64,
    media_info: MediaInfo,
    error: Option<String>,
}

impl<E: MediaElement, S: VideoSurface> PlaybackController<E, S> {
    pub fn new(element: E, surface: S, options: PlayerOptions) -> Self {
        let volume = options.initial_volume.clamp(0.0, 1.0);
        let mut ctrl = Self {
            element,
            surface,
            options,
            source: String::new(),
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            muted: volume == 0.0,
            fullscreen: false,
            buffered_pct: 0.0,
            media_info: MediaInfo::default(),
            error: None,
        };
        ctrl.element.set_volume(ctrl.volume);
        ctrl
    }

    /// Point the controller at a new media URL. The previous error and all
    /// mirrored stream state are discarded; nothing plays until the element
    /// reports metadata and the user hits play (or autoplay is on).
    pub fn set_source(&mut self, url: &str) -> AppResult<()> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(AppError::MediaLoad("empty media URL".to_string()));
        }
        self.source = trimmed.to_string();
        self.element.set_source(trimmed);
        self.playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.buffered_pct = 0.0;
        self.media_info = MediaInfo::default();
        self.error = None;
        if self.options.autoplay {
            self.toggle_play();
        }
        Ok(())
    }

    /// Play/pause toggle. A rejected play attempt surfaces as the generic
    /// load-error string, same as a failed load.
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.element.pause();
            self.playing = false;
        } else {
            match self.element.play() {
                Ok(()) => self.playing = true,
                Err(e) => self.error = Some(e.to_string()),
            }
        }
    }

    /// Absolute seek, clamped to [0, duration].
    pub fn seek(&mut self, time: f64) {
        let clamped = time.clamp(0.0, self.duration);
        self.current_time = clamped;
        self.element.set_position(clamped);
    }

    /// Relative skip; negative goes backwards. Clamps like `seek`.
    pub fn skip(&mut self, seconds: f64) {
        self.seek(self.current_time + seconds);
    }

    pub fn skip_forward(&mut self) {
        self.skip(self.options.skip_seconds);
    }

    pub fn skip_back(&mut self) {
        self.skip(-self.options.skip_seconds);
    }

    /// Set the volume, clamped to [0, 1]. Volume zero counts as muted.
    pub fn set_volume(&mut self, volume: f64) {
        let clamped = volume.clamp(0.0, 1.0);
        self.volume = clamped;
        self.muted = clamped == 0.0;
        self.element.set_volume(clamped);
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.element.set_muted(self.muted);
    }

    pub fn toggle_fullscreen(&mut self) -> AppResult<()> {
        if self.fullscreen {
            self.surface.exit_fullscreen()?;
            self.fullscreen = false;
        } else {
            self.surface.enter_fullscreen()?;
            self.fullscreen = true;
        }
        Ok(())
    }

    /// Drain every pending element event and fold it into the mirrored
    /// state. Call once per tick, after user input.
    pub fn pump_events(&mut self) {
        while let Some(ev) = self.element.poll_event() {
            self.handle_event(ev);
        }
    }

    fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate {
                position,
                buffered_end,
            } => {
                self.current_time = position;
                if self.duration > 0.0 {
                    self.buffered_pct = (buffered_end / self.duration) * 100.0;
                }
            }
            MediaEvent::MetadataLoaded => {
                self.duration = self.element.duration();
                self.refresh_media_info();
            }
            MediaEvent::PlaybackError(msg) => {
                self.playing = false;
                self.error = Some(AppError::MediaLoad(msg).to_string());
            }
        }
    }

    /// Recompute the media-info snapshot wholesale from whatever the
    /// element currently reports.
    fn refresh_media_info(&mut self) {
        let mut info = MediaInfo::default();
        if let Some(meta) = self.element.metadata() {
            if let Some(vc) = meta.video_codec {
                info.video_codec = vc;
            }
            if let Some(ac) = meta.audio_codec {
                info.audio_codec = ac;
            }
            if meta.width > 0 && meta.height > 0 {
                info.resolution = format!("{}x{}", meta.width, meta.height);
            }
            if let Some(fps) = meta.frame_rate {
                info.frame_rate = format!("{fps}");
            }
            if let Some(ch) = meta.audio_channels {
                info.audio_channels = ch.to_string();
            }
        }
        info.bitrate = MediaInfo::estimate_bitrate(self.element.decoded_bytes(), self.duration);
        self.media_info = info;
    }

    /// Direct access to the wrapped element, for hosts that also drive it
    /// (the scripted element's load/advance hooks).
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn buffered_pct(&self) -> f64 {
        self.buffered_pct
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn media_info(&self) -> &MediaInfo {
        &self.media_info
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One-line state read-out for the CLI.
    pub fn summary(&self) -> String {
        let state = if self.playing { "playing" } else { "paused" };
        let mute = if self.muted { ", muted" } else { "" };
        let fs = if self.fullscreen { ", fullscreen" } else { "" };
        format!(
            "[{}] {} / {} (buffered {:.0}%) vol {:.2}{}{}",
            state,
            format_clock(self.current_time),
            format_clock(self.duration),
            self.buffered_pct,
            self.volume,
            mute,
            fs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::media::{HeadlessSurface, ScriptedMediaElement, TrackMetadata};

    fn controller(duration: f64) -> PlaybackController<ScriptedMediaElement, HeadlessSurface> {
        let element = ScriptedMediaElement::new(duration, TrackMetadata::default(), 0);
        PlaybackController::new(element, HeadlessSurface::default(), PlayerOptions::default())
    }

    #[test]
    fn volume_zero_sets_muted() {
        let mut ctrl = controller(60.0);
        ctrl.set_volume(0.0);
        assert!(ctrl.is_muted());
        ctrl.set_volume(0.4);
        assert!(!ctrl.is_muted());
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut ctrl = controller(60.0);
        ctrl.set_volume(3.5);
        assert_eq!(ctrl.volume(), 1.0);
        ctrl.set_volume(-1.0);
        assert_eq!(ctrl.volume(), 0.0);
        assert!(ctrl.is_muted());
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut ctrl = controller(60.0);
        assert!(ctrl.set_source("   ").is_err());
        assert!(ctrl.set_source(" https://example.org/clip.mp4 ").is_ok());
        assert_eq!(ctrl.source(), "https://example.org/clip.mp4");
    }

    #[test]
    fn set_source_clears_previous_error() {
        let element = ScriptedMediaElement::broken("network");
        let mut ctrl = PlaybackController::new(
            element,
            HeadlessSurface::default(),
            PlayerOptions::default(),
        );
        ctrl.pump_events();
        assert!(ctrl.last_error().is_some());
        ctrl.set_source("https://example.org/other.mp4").unwrap();
        assert!(ctrl.last_error().is_none());
    }
}

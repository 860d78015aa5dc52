//! Controller/element event-flow tests against the library API.

use mediapanel::core::player::{PlaybackController, PlayerOptions};
use mediapanel::platform::media::{HeadlessSurface, ScriptedMediaElement, TrackMetadata};

fn metadata_720p() -> TrackMetadata {
    TrackMetadata {
        video_codec: Some("avc1.42E01E".to_string()),
        audio_codec: Some("mp4a.40.2".to_string()),
        width: 1280,
        height: 720,
        frame_rate: Some(30.0),
        audio_channels: Some(2),
    }
}

fn controller(duration: f64) -> PlaybackController<ScriptedMediaElement, HeadlessSurface> {
    let element = ScriptedMediaElement::new(duration, metadata_720p(), 250_000);
    PlaybackController::new(element, HeadlessSurface::default(), PlayerOptions::default())
}

#[test]
fn metadata_event_sets_duration_and_media_info() {
    let mut ctrl = controller(300.0);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    assert_eq!(ctrl.duration(), 0.0);

    ctrl.element_mut().load();
    ctrl.pump_events();

    assert_eq!(ctrl.duration(), 300.0);
    assert_eq!(ctrl.media_info().resolution, "1280x720");
    assert_eq!(ctrl.media_info().audio_channels, "2");
    // Nothing decoded yet, so the estimate stays unknown.
    assert_eq!(ctrl.media_info().bitrate, "Unknown");
}

#[test]
fn time_updates_mirror_position_and_buffered_percentage() {
    let mut ctrl = controller(100.0);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    ctrl.element_mut().load();
    ctrl.pump_events();

    ctrl.toggle_play();
    ctrl.element_mut().advance(10.0);
    ctrl.pump_events();

    assert!(ctrl.is_playing());
    assert_eq!(ctrl.current_time(), 10.0);
    // 10 s position + 25 % readahead = 35 % buffered.
    assert!((ctrl.buffered_pct() - 35.0).abs() < 1e-6);
}

#[test]
fn seek_clamps_at_both_ends() {
    let mut ctrl = controller(100.0);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    ctrl.element_mut().load();
    ctrl.pump_events();

    ctrl.seek(200.0);
    assert_eq!(ctrl.current_time(), 100.0);
    ctrl.seek(-50.0);
    assert_eq!(ctrl.current_time(), 0.0);
    ctrl.seek(42.5);
    assert_eq!(ctrl.current_time(), 42.5);
}

#[test]
fn skip_moves_relative_and_clamps() {
    let mut ctrl = controller(100.0);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    ctrl.element_mut().load();
    ctrl.pump_events();

    ctrl.seek(95.0);
    ctrl.skip_forward();
    assert_eq!(ctrl.current_time(), 100.0);
    ctrl.skip_back();
    assert_eq!(ctrl.current_time(), 90.0);
    ctrl.skip(-200.0);
    assert_eq!(ctrl.current_time(), 0.0);
}

#[test]
fn playback_error_surfaces_generic_message() {
    let element = ScriptedMediaElement::broken("network timeout");
    let mut ctrl = PlaybackController::new(
        element,
        HeadlessSurface::default(),
        PlayerOptions::default(),
    );
    ctrl.pump_events();

    let err = ctrl.last_error().expect("error recorded");
    assert!(err.contains("An error occurred while loading the media"));
    assert!(err.contains("network timeout"));
    assert!(!ctrl.is_playing());
}

#[test]
fn mute_toggle_is_independent_of_volume() {
    let mut ctrl = controller(60.0);
    ctrl.set_volume(0.8);
    ctrl.toggle_mute();
    assert!(ctrl.is_muted());
    assert_eq!(ctrl.volume(), 0.8);
    ctrl.toggle_mute();
    assert!(!ctrl.is_muted());
}

#[test]
fn autoplay_starts_playback_on_source_change() {
    let element = ScriptedMediaElement::new(60.0, metadata_720p(), 0);
    let options = PlayerOptions {
        autoplay: true,
        ..PlayerOptions::default()
    };
    let mut ctrl = PlaybackController::new(element, HeadlessSurface::default(), options);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    assert!(ctrl.is_playing());
}

#[test]
fn bitrate_estimate_appears_after_metadata_reload() {
    let mut ctrl = controller(100.0);
    ctrl.set_source("https://example.org/clip.mp4").unwrap();
    ctrl.element_mut().load();
    ctrl.pump_events();

    ctrl.toggle_play();
    ctrl.element_mut().advance(10.0);
    // A second metadata notification recomputes the snapshot with the
    // decoded-byte counter populated: 2.5 MB over 100 s = 200 kbps.
    ctrl.element_mut().load();
    ctrl.pump_events();

    assert_eq!(ctrl.media_info().bitrate, "200 kbps");
}

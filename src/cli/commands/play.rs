use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::player::{PlaybackController, PlayerOptions};
use crate::errors::{AppError, AppResult};
use crate::platform::media::{HeadlessSurface, ScriptedMediaElement, TrackMetadata};
use crate::ui::messages::{detail, error, header};

/// One transport action from the `--script` argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Load,
    Play,
    Pause,
    Toggle,
    Advance(f64),
    Skip(f64),
    Seek(f64),
    Volume(f64),
    Mute,
    Fullscreen,
}

pub fn parse_script(script: &str) -> AppResult<Vec<Step>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(step: &str) -> AppResult<Step> {
    let (name, arg) = match step.split_once(':') {
        Some((n, a)) => (n.trim(), Some(a.trim())),
        None => (step, None),
    };

    let numeric = |a: Option<&str>| -> AppResult<f64> {
        a.and_then(|v| v.parse::<f64>().ok())
            .ok_or_else(|| AppError::InvalidStep(step.to_string()))
    };

    match (name, arg) {
        ("load", None) => Ok(Step::Load),
        ("play", None) => Ok(Step::Play),
        ("pause", None) => Ok(Step::Pause),
        ("toggle", None) => Ok(Step::Toggle),
        ("mute", None) => Ok(Step::Mute),
        ("fullscreen", None) => Ok(Step::Fullscreen),
        ("advance", a) => Ok(Step::Advance(numeric(a)?)),
        ("skip", a) => Ok(Step::Skip(numeric(a)?)),
        ("seek", a) => Ok(Step::Seek(numeric(a)?)),
        ("volume", a) => Ok(Step::Volume(numeric(a)?)),
        _ => Err(AppError::InvalidStep(step.to_string())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Play {
        url,
        script,
        duration,
        media_info,
    } = cmd
    {
        let steps = parse_script(script)?;

        // Scripted stream standing in for the real element: 720p H.264/AAC
        // at a nominal quarter-megabyte per second.
        let metadata = TrackMetadata {
            video_codec: Some("avc1.42E01E".to_string()),
            audio_codec: Some("mp4a.40.2".to_string()),
            width: 1280,
            height: 720,
            frame_rate: Some(30.0),
            audio_channels: Some(2),
        };
        let element = ScriptedMediaElement::new(*duration, metadata, 250_000);
        let options = PlayerOptions {
            autoplay: cfg.autoplay,
            skip_seconds: cfg.skip_seconds,
            initial_volume: cfg.initial_volume,
        };
        let mut controller = PlaybackController::new(element, HeadlessSurface::default(), options);
        controller.set_source(url)?;

        header(format!("Playback: {url}"));
        for step in steps {
            run_step(&mut controller, &step)?;
            controller.pump_events();
            println!("{:<12} {}", format!("{step:?}"), controller.summary());
            if let Some(err) = controller.last_error() {
                error(err);
            }
        }

        if *media_info {
            let mi = controller.media_info();
            header("Media Info");
            detail(format!("Video Codec: {}", mi.video_codec));
            detail(format!("Audio Codec: {}", mi.audio_codec));
            detail(format!("Resolution: {}", mi.resolution));
            detail(format!("Frame Rate: {}", mi.frame_rate));
            detail(format!("Bitrate: {}", mi.bitrate));
            detail(format!("Audio Channels: {}", mi.audio_channels));
        }
    }
    Ok(())
}

fn run_step(
    controller: &mut PlaybackController<ScriptedMediaElement, HeadlessSurface>,
    step: &Step,
) -> AppResult<()> {
    match step {
        Step::Load => controller.element_mut().load(),
        Step::Toggle => controller.toggle_play(),
        Step::Play => {
            if !controller.is_playing() {
                controller.toggle_play();
            }
        }
        Step::Pause => {
            if controller.is_playing() {
                controller.toggle_play();
            }
        }
        Step::Advance(secs) => controller.element_mut().advance(*secs),
        Step::Skip(secs) => controller.skip(*secs),
        Step::Seek(secs) => controller.seek(*secs),
        Step::Volume(v) => controller.set_volume(*v),
        Step::Mute => controller.toggle_mute(),
        Step::Fullscreen => controller.toggle_fullscreen()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_script() {
        let steps = parse_script("load, play, advance:5, skip:-10, seek:42.5, volume:0.5, mute, fullscreen, pause").unwrap();
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[4], Step::Seek(42.5));
        assert_eq!(steps[3], Step::Skip(-10.0));
    }

    #[test]
    fn rejects_unknown_or_malformed_steps() {
        assert!(parse_script("rewind").is_err());
        assert!(parse_script("seek").is_err());
        assert!(parse_script("volume:loud").is_err());
    }
}

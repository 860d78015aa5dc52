use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Start playback as soon as a source is set.
    #[serde(default)]
    pub autoplay: bool,
    /// Relative skip step for the transport controls, in seconds.
    #[serde(default = "default_skip_seconds")]
    pub skip_seconds: f64,
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,
    /// Extra codec type strings appended to the built-in probe list.
    #[serde(default)]
    pub custom_codecs: Vec<String>,
    /// Capability table for the static type-support backend.
    #[serde(default = "default_supported_types")]
    pub supported_types: Vec<String>,
}

fn default_skip_seconds() -> f64 {
    10.0
}

fn default_initial_volume() -> f64 {
    1.0
}

fn default_supported_types() -> Vec<String> {
    // Baseline every mainstream runtime decodes; multichannel audio is
    // deliberately absent so the fallback path is observable out of the box.
    vec![
        "video/mp4; codecs=\"avc1.42E01E, mp4a.40.2\"".to_string(),
        "video/webm; codecs=\"vp8, vorbis\"".to_string(),
        "video/webm; codecs=\"vp9\"".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: false,
            skip_seconds: default_skip_seconds(),
            initial_volume: default_initial_volume(),
            custom_codecs: Vec::new(),
            supported_types: default_supported_types(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("mediapanel")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".mediapanel")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("mediapanel.conf")
    }

    /// Load from the given path, or from the standard location, falling
    /// back to defaults when no file exists.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::config_file);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration to the standard location, creating the
    /// directory on first use.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;
        let content = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), content).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_multichannel_audio() {
        let cfg = Config::default();
        assert_eq!(cfg.skip_seconds, 10.0);
        assert!(cfg.supported_types.iter().all(|t| t.starts_with("video/")));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let cfg: Config = serde_yaml::from_str("autoplay: true\n").unwrap();
        assert!(cfg.autoplay);
        assert_eq!(cfg.initial_volume, 1.0);
        assert_eq!(cfg.supported_types.len(), 3);
    }
}

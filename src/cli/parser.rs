use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mediapanel
/// Demo driver for the playback, codec-probe and task-tracking components
#[derive(Parser)]
#[command(
    name = "mediapanel",
    version = env!("CARGO_PKG_VERSION"),
    about = "Media playback controls, codec capability probing and work-time tracking",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe codec support and report the AC-3 / E-AC-3 class flags
    Probe {
        /// Text file containing one extra codec type string to include
        #[arg(long = "codec-file", help = "Upload a custom codec string from a text file")]
        codec_file: Option<String>,

        /// Capability table file, one supported type string per line
        /// (overrides the configured table)
        #[arg(long = "caps-file")]
        caps_file: Option<String>,

        #[arg(long = "json", help = "Print the probe report as JSON")]
        json: bool,
    },

    /// Drive the playback controller through a step script
    Play {
        /// Media URL to load
        url: String,

        /// Comma-separated steps: load, play, pause, toggle, advance:SECS,
        /// skip:SECS, seek:SECS, volume:LEVEL, mute, fullscreen
        #[arg(long = "script", default_value = "load,play")]
        script: String,

        /// Scripted stream duration in seconds
        #[arg(long = "duration", default_value_t = 120.0)]
        duration: f64,

        #[arg(long = "media-info", help = "Print the media-info panel after the script")]
        media_info: bool,
    },

    /// Run start/complete task cycles and export the history
    Track {
        /// Task spec "project,ticket,description"; repeatable
        #[arg(long = "task", required = true)]
        tasks: Vec<String>,

        #[arg(long = "format", value_enum, default_value = "tsv")]
        format: ExportFormat,

        /// Write the export to a file instead of stdout
        #[arg(long = "out")]
        out: Option<String>,

        #[arg(long = "copy", help = "Also copy the export to the system clipboard")]
        copy: bool,
    },
}

//! Unified application error type.
//! All modules (core, platform, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Media playback
    // ---------------------------
    #[error("An error occurred while loading the media: {0}")]
    MediaLoad(String),

    #[error("Media element error: {0}")]
    Media(String),

    // ---------------------------
    // Codec probing
    // ---------------------------
    #[error("Codec initialization failed: {0}")]
    CodecInit(String),

    #[error("Failed to load custom codec: {0}")]
    CodecUpload(String),

    #[error("Invalid codec type string: {0}")]
    InvalidCodecString(String),

    // ---------------------------
    // Clipboard
    // ---------------------------
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ---------------------------
    // Task tracking
    // ---------------------------
    #[error("A task is already in progress; complete it before starting a new one")]
    TaskAlreadyActive,

    #[error("No task is currently in progress")]
    NoActiveTask,

    #[error("Invalid task spec: {0}")]
    InvalidTask(String),

    // ---------------------------
    // CLI script parsing
    // ---------------------------
    #[error("Invalid playback step: {0}")]
    InvalidStep(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

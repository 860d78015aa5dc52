//! System clipboard capability.
//!
//! The tracker writes its export through this trait; callers decide whether
//! a failure is surfaced or merely logged.

use crate::errors::{AppError, AppResult};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// Clipboard backed by the desktop environment. On Linux this shells out to
/// `xclip`, then `xsel`; other platforms report the clipboard as
/// unavailable.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let child = Command::new("xclip")
            .args(["-selection", "clipboard"])
            .stdin(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .or_else(|_| {
                Command::new("xsel")
                    .args(["--clipboard", "--input"])
                    .stdin(Stdio::piped())
                    .stderr(Stdio::null())
                    .spawn()
            });

        let mut child = child.map_err(|e| AppError::Clipboard(e.to_string()))?;
        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| AppError::Clipboard(e.to_string()))?;
        }
        let status = child.wait().map_err(|e| AppError::Clipboard(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(AppError::Clipboard(format!(
                "clipboard helper exited with {status}"
            )))
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, _text: &str) -> AppResult<()> {
        Err(AppError::Clipboard(
            "no system clipboard helper on this platform".to_string(),
        ))
    }
}

/// In-memory clipboard used by tests and by the demo CLI when no system
/// clipboard is wanted.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails; exercises the logged-warning path.
#[derive(Debug, Default)]
pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> AppResult<()> {
        Err(AppError::Clipboard("write rejected".to_string()))
    }
}

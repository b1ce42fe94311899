use std::io::Write;
use std::process::{Command, Stdio};

use superdrag_common::PlatformError;

/// Anything that can put text on the system clipboard.
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

/// Primary clipboard backed by `arboard`.
///
/// The handle is opened lazily so a missing display server only fails the
/// copy that needs it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, PlatformError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard unavailable".into()))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let result = self
            .handle()?
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()));
        if result.is_err() {
            // Reopen on the next attempt; the connection may have gone stale.
            self.inner = None;
        }
        result
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// Fallback clipboard that pipes text into an external copy utility.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The conventional copy utility for the current platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".into(), "clipboard".into()])
        }
    }
}

impl ClipboardBackend for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlatformError::ClipboardError(format!("{}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                // Close the pipe and reap the child before reporting.
                drop(stdin);
                let _ = child.wait();
                return Err(PlatformError::ClipboardError(format!("{}: {e}", self.program)));
            }
        }

        let status = child
            .wait()
            .map_err(|e| PlatformError::ClipboardError(format!("{}: {e}", self.program)))?;
        if status.success() {
            Ok(())
        } else {
            Err(PlatformError::ClipboardError(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }

    fn name(&self) -> &'static str {
        "command"
    }
}

// src/clipboard.rs
// =============================================================================
// Writing text to the system clipboard.
//
// There is no portable clipboard API in the standard library, so
// SystemClipboard pipes the text into whatever tool the platform has:
// - macOS:   pbcopy
// - Windows: clip
// - Wayland: wl-copy
// - X11:     xclip -selection clipboard
//
// The write is async (tokio::process) because it is a suspension point of
// the copy action, just like the network requests.
// =============================================================================

use crate::error::ClipboardError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = clipboard_command().ok_or(ClipboardError::Unsupported)?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // Dropping stdin closes the pipe so the tool can finish
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::Exited(status));
        }
        Ok(())
    }
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

// Picks the clipboard tool for the current platform
fn clipboard_command() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("pbcopy", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        Some(("clip", NO_ARGS))
    } else if cfg!(unix) {
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Some(("wl-copy", NO_ARGS))
        } else {
            Some(("xclip", XCLIP_ARGS))
        }
    } else {
        None
    }
}

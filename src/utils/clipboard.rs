//! System clipboard access through the terminal
//!
//! Copying uses the OSC 52 escape sequence, which terminals forward to the
//! system clipboard, so it also works over SSH. Pasting arrives the other way,
//! as bracketed-paste events read by the UI loop.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        execute!(std::io::stdout(), CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}

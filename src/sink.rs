//! Destinations for the finished buffer.

use crate::ClipcatError;
use std::io::{self, Write};

/// Receives the complete buffer once, after the pipeline succeeded.
pub trait Sink {
    fn deliver(&mut self, buffer: &[u8]) -> Result<(), ClipcatError>;
}

/// The OS clipboard, set in a single operation.
///
/// Clipboard text must be UTF-8, so invalid sequences become U+FFFD here and
/// nowhere else.
#[cfg(feature = "clipboard")]
#[derive(Debug, Default)]
pub struct ClipboardSink;

#[cfg(feature = "clipboard")]
impl Sink for ClipboardSink {
    fn deliver(&mut self, buffer: &[u8]) -> Result<(), ClipcatError> {
        let text = String::from_utf8_lossy(buffer);
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipcatError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipcatError::Clipboard(e.to_string()))?;
        tracing::info!("Copied {} bytes to clipboard", buffer.len());
        Ok(())
    }
}

/// Standard output, byte for byte, for headless machines and pipes.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn deliver(&mut self, buffer: &[u8]) -> Result<(), ClipcatError> {
        let mut handle = io::stdout().lock();
        handle
            .write_all(buffer)
            .and_then(|()| handle.flush())
            .map_err(ClipcatError::Output)
    }
}

/// Keeps the last delivered buffer in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub contents: Option<Vec<u8>>,
}

impl Sink for MemorySink {
    fn deliver(&mut self, buffer: &[u8]) -> Result<(), ClipcatError> {
        self.contents = Some(buffer.to_vec());
        Ok(())
    }
}

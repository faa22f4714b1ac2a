use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

/// The complete result of a clipcat run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClipcatResult {
    /// Every included file as `// <path>\n<content>\n`, in inclusion order.
    pub buffer: Vec<u8>,
    /// The paths that were included, in the same order as their blocks.
    pub files: Vec<PathBuf>,
}

impl ClipcatResult {
    /// The buffer as text.
    ///
    /// File contents are copied byte for byte, so a file in a legacy encoding
    /// can leave invalid UTF-8 behind; those sequences become U+FFFD here.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buffer)
    }

    pub fn report(&self) -> Report {
        Report {
            files: self.files.clone(),
            file_count: self.files.len(),
            bytes: self.buffer.len(),
        }
    }
}

/// Summary printed after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub files: Vec<PathBuf>,
    pub file_count: usize,
    pub bytes: usize,
}

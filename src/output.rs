//! Output formatting for clipcat.
//!
//! [`append_file`] renders one file block into the run's buffer and
//! [`format_report`] renders the post-run summary as plain text or JSON.

use crate::{ClipcatError, Report};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Appends `// <path>\n`, the file's bytes, and a blank separator line.
///
/// Content is copied line by line with the original terminators; a final
/// line without a terminator is copied as it is.
///
/// # Errors
///
/// Returns [`ClipcatError::Io`] naming `path` if it cannot be opened or read.
/// The header may already be in `buffer` when a read fails, so callers must
/// discard the buffer on error.
pub fn append_file(buffer: &mut Vec<u8>, path: &Path) -> Result<(), ClipcatError> {
    let file = File::open(path).map_err(|e| ClipcatError::io(path, e))?;
    buffer.extend_from_slice(format!("// {}\n", path.display()).as_bytes());
    let mut reader = BufReader::new(file);
    loop {
        let read = reader
            .read_until(b'\n', buffer)
            .map_err(|e| ClipcatError::io(path, e))?;
        if read == 0 {
            break;
        }
    }
    buffer.push(b'\n');
    Ok(())
}

/// Formats the report printed after the buffer has been delivered.
///
/// # Errors
///
/// JSON output fails for paths that are not valid UTF-8.
pub fn format_report(
    report: &Report,
    format: ReportFormat,
    pretty: bool,
) -> Result<String, ClipcatError> {
    match format {
        ReportFormat::Text => Ok(format_text(report)),
        ReportFormat::Json => format_json(report, pretty),
    }
}

fn format_text(report: &Report) -> String {
    let mut out = String::with_capacity(64 + report.files.len() * 32);
    out.push_str("Content copied to clipboard.\n");
    out.push_str("Files processed:\n");
    for path in &report.files {
        out.push_str(&path.display().to_string());
        out.push('\n');
    }
    out
}

fn format_json(report: &Report, pretty: bool) -> Result<String, ClipcatError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| ClipcatError::Output(e.into()))
}

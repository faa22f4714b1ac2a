//! # Clipcat
//!
//! `clipcat` concatenates the text files found under one or more paths into a single
//! buffer, prefixing each file with a `// <path>` header, ready to be placed on the
//! system clipboard.
//!
//! Directories are walked recursively. Paths containing any exclusion substring are
//! skipped before they are opened, and files whose first bytes do not sniff as a
//! `text/*` media type are skipped as binary. A run is all-or-nothing: any traversal
//! or read error aborts it without producing a partial buffer.
//!
//! # Features
//!
//! - `clipboard` (default): enables [`ClipboardSink`] via the `arboard` crate.
//!
//! # Example
//!
//! ```no_run
//! use clipcat::{ClipcatBuilder, MemorySink, Sink, TextDetection, clipcat};
//!
//! let options = ClipcatBuilder::new(["src", "Cargo.toml"])
//!     .exclude_list(".git, target")
//!     .text_detection(TextDetection::Sniff)
//!     .build();
//!
//! let result = clipcat(options).expect("Failed to collect files");
//!
//! let mut sink = MemorySink::default();
//! sink.deliver(&result.buffer).unwrap();
//! for path in &result.files {
//!     println!("{}", path.display());
//! }
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
pub mod sink;
pub mod sniff;
mod types;
mod walker;

pub use engine::clipcat;
pub use error::ClipcatError;
pub use filter::Exclusions;
pub use options::{
    ClipcatBuilder, ClipcatOptions, DEFAULT_SNIFF_LEN, TextDetection, parse_exclude_list,
};
#[cfg(feature = "clipboard")]
pub use sink::ClipboardSink;
pub use sink::{MemorySink, Sink, StdoutSink};
pub use types::{ClipcatResult, Report};
pub use walker::{Candidates, candidates};

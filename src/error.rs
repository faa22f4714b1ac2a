use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ClipcatError {
    #[error("no target paths given")]
    NoTargets,
    #[error("failed to traverse {target}: {source}")]
    Walk {
        target: PathBuf,
        source: ignore::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
impl ClipcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClipcatError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn walk(target: impl Into<PathBuf>, source: ignore::Error) -> Self {
        ClipcatError::Walk {
            target: target.into(),
            source,
        }
    }
}

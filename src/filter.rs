//! Path exclusion.
//!
//! Two independent rules decide whether a discovered path is skipped: literal
//! substrings (the `--exclude` list) and glob ignore patterns. Neither touches
//! the filesystem, so the check always runs before a file is opened.

use crate::error::ClipcatError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled exclusion rules for one run.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    substrings: Vec<String>,
    globs: Option<GlobSet>,
}

impl Exclusions {
    /// Builds the rules. Empty substrings are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClipcatError::Pattern`] if a glob pattern does not compile.
    pub fn new(substrings: &[String], ignore_patterns: &[String]) -> Result<Self, ClipcatError> {
        let substrings = substrings
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();
        let globs = if ignore_patterns.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in ignore_patterns {
                let glob = Glob::new(pattern).map_err(|source| ClipcatError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                builder.add(glob);
            }
            Some(builder.build().map_err(|source| ClipcatError::Pattern {
                pattern: ignore_patterns.join(","),
                source,
            })?)
        };
        Ok(Self { substrings, globs })
    }

    /// True when no rule can ever exclude a path.
    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty() && self.globs.is_none()
    }

    /// Case-sensitive literal substring match against the whole path string,
    /// or a glob match.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        if self
            .substrings
            .iter()
            .any(|s| path_str.contains(s.as_str()))
        {
            return true;
        }
        self.globs.as_ref().is_some_and(|set| set.is_match(path))
    }
}

use crate::error::ClipcatError;
use crate::filter::Exclusions;
use crate::options::ClipcatOptions;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
/// Lazy sequence of candidate files under one target path.
///
/// Directories are never yielded. A plain file target yields itself.
pub struct Candidates {
    target: PathBuf,
    inner: ignore::Walk,
}
impl Candidates {
    pub(crate) fn new(target: &Path, options: &ClipcatOptions, exclusions: &Exclusions) -> Self {
        let mut builder = WalkBuilder::new(target);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links);
        if options.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        if !exclusions.is_empty() {
            let exclusions = exclusions.clone();
            builder.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && exclusions.is_excluded(entry.path()))
            });
        }
        Self {
            target: target.to_path_buf(),
            inner: builder.build(),
        }
    }
}
impl Iterator for Candidates {
    type Item = Result<PathBuf, ClipcatError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        continue;
                    }
                    return Some(Ok(entry.into_path()));
                }
                Err(e) => return Some(Err(ClipcatError::walk(&self.target, e))),
            }
        }
    }
}
/// Walks `target` with the traversal settings in `options`, pruning
/// directories that `options`' exclusions already rule out.
///
/// # Errors
///
/// Returns [`ClipcatError::Pattern`] if an ignore glob does not compile.
/// Traversal failures surface lazily as items of the returned iterator.
pub fn candidates(target: &Path, options: &ClipcatOptions) -> Result<Candidates, ClipcatError> {
    let exclusions = Exclusions::new(&options.exclude, &options.ignore_patterns)?;
    Ok(Candidates::new(target, options, &exclusions))
}

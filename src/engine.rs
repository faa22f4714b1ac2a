use crate::error::ClipcatError;
use crate::filter::Exclusions;
use crate::options::ClipcatOptions;
use crate::output::append_file;
use crate::sniff::is_text_file;
use crate::types::ClipcatResult;
use crate::walker::Candidates;
use std::path::Path;
fn process_target(
    target: &Path,
    options: &ClipcatOptions,
    exclusions: &Exclusions,
    result: &mut ClipcatResult,
) -> Result<(), ClipcatError> {
    tracing::debug!("Walking target {}", target.display());
    for candidate in Candidates::new(target, options, exclusions) {
        let path = candidate?;
        if exclusions.is_excluded(&path) {
            tracing::debug!("Excluded: {}", path.display());
            continue;
        }
        if !is_text_file(&path, options.text_detection, options.sniff_len) {
            tracing::debug!("Skipping non-text file: {}", path.display());
            continue;
        }
        append_file(&mut result.buffer, &path)?;
        tracing::debug!("Included: {}", path.display());
        result.files.push(path);
    }
    Ok(())
}
/// Runs the whole pipeline over every target in order.
///
/// The run is all-or-nothing: the first traversal or read error aborts it and
/// nothing accumulated so far is returned.
///
/// # Errors
///
/// [`ClipcatError::NoTargets`] for an empty target list, [`ClipcatError::Pattern`]
/// for a bad ignore glob, [`ClipcatError::Walk`] when a target is missing or
/// unreadable, and [`ClipcatError::Io`] when an included file fails mid-read.
pub fn clipcat(options: ClipcatOptions) -> Result<ClipcatResult, ClipcatError> {
    if options.targets.is_empty() {
        return Err(ClipcatError::NoTargets);
    }
    let exclusions = Exclusions::new(&options.exclude, &options.ignore_patterns)?;
    let mut result = ClipcatResult::default();
    for target in &options.targets {
        process_target(target, &options, &exclusions, &mut result)?;
    }
    tracing::info!(
        "Collected {} files ({} bytes) from {} targets",
        result.files.len(),
        result.buffer.len(),
        options.targets.len()
    );
    Ok(result)
}

//! Candidate environment file listing.

use std::fs;

use globset::{GlobBuilder, GlobMatcher};

use envswitch_core::{CatalogConfig, EnvFile, SwitchError};

/// Compile the candidate file-name pattern.
pub fn candidate_matcher(pattern: &str) -> Result<GlobMatcher, SwitchError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| SwitchError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

/// List the candidate environment files in the configured directory.
///
/// Entries are matched on their file name only and directories are skipped.
/// The result is sorted lexicographically by name. Individual entries that
/// cannot be inspected are skipped; only an unreadable directory is an error.
pub fn list_candidate_files(config: &CatalogConfig) -> Result<Vec<EnvFile>, SwitchError> {
    let matcher = candidate_matcher(&config.pattern)?;

    let entries = fs::read_dir(&config.directory).map_err(|source| SwitchError::CatalogRead {
        path: config.directory.clone(),
        source,
    })?;

    let mut files: Vec<EnvFile> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            matcher
                .is_match(&name)
                .then(|| EnvFile::new(name, entry.path()))
        })
        .collect();

    files.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        directory = %config.directory.display(),
        count = files.len(),
        "listed candidate files"
    );

    Ok(files)
}

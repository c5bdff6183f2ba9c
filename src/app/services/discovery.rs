//! Input file discovery
//!
//! Finds input files by globbing the configured filename pattern inside the
//! search directory. Files are returned sorted by filename so that runs are
//! deterministic; an empty result means there is nothing to do, which is not
//! an error.

use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discover input files matching `pattern` directly inside `search_path`,
/// sorted by filename.
pub fn discover_input_files(search_path: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob_pattern = search_path.join(pattern);
    let glob_pattern = glob_pattern.to_string_lossy();
    debug!("Discovering input files with pattern: {}", glob_pattern);

    let mut files: Vec<PathBuf> = glob::glob(&glob_pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Discovered {} input files", files.len());
    Ok(files)
}

//! Recursive discovery of run output files under a results directory.

use crate::domain::model::RunSet;
use crate::utils::error::{CompareError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SUMMARY_EXTENSION: &str = "summaryCounts";
pub const TAG_INFO_EXTENSION: &str = "tagInfo";

/// Finds every file below `root` whose extension is exactly `extension`,
/// sorted by path so that run `i` of each kind lines up.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CompareError::io(path, e.into())
        })?;

        if entry.file_type().is_file()
            && entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension)
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!(
        "Found {} *.{} file(s) under {}",
        files.len(),
        extension,
        root.display()
    );
    Ok(files)
}

/// Discovers summary and tag info files and pairs them by sorted position.
pub fn discover_run_set(
    root: &Path,
    summary_extension: &str,
    tag_info_extension: &str,
    min_runs: usize,
) -> Result<RunSet> {
    let summary_files = discover_files(root, summary_extension)?;
    let tag_info_files = discover_files(root, tag_info_extension)?;

    tracing::info!(
        "📁 Discovered {} summary file(s) and {} tag info file(s) in {}",
        summary_files.len(),
        tag_info_files.len(),
        root.display()
    );

    RunSet::new(summary_files, tag_info_files, min_runs)
}

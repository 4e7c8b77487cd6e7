//! Reading corpus text from files and directories.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the corpus files under `root` in sorted path order.
///
/// Skips directories and hidden entries (anything whose name starts with `.`,
/// including everything below a hidden directory).
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::CorpusNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Read a corpus from a file, or from every file below a directory.
///
/// Files are decoded as lossy UTF-8 and joined with newlines, so the same
/// directory always produces the same text.
pub fn read_corpus(path: &Path) -> Result<String> {
    let files = collect_files(path)?;

    let mut parts = Vec::with_capacity(files.len());
    for file in &files {
        let bytes = std::fs::read(file)?;
        parts.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    Ok(parts.join("\n"))
}

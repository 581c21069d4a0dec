//! Recursive listing of regular files under a directory.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tessera_core::{TesseraError, TesseraResult};
use tracing::debug;
use walkdir::WalkDir;

/// Walks `root` recursively and returns every regular file, root-relative
/// paths included, in file-name order within each directory.
///
/// Symbolic links to files count as regular files. A missing or unreadable
/// root or entry fails the whole listing.
pub fn regular_files(root: &Path) -> TesseraResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| TesseraError::Io(e.to_string()))?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    debug!(root = %root.display(), count = files.len(), "Listed regular files");
    Ok(files)
}

/// Runs [`regular_files`] on the blocking pool.
pub async fn regular_files_blocking(root: PathBuf) -> TesseraResult<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || regular_files(&root))
        .await
        .map_err(|e| TesseraError::Internal(format!("File listing task failed: {e}")))?
}

/// Renders paths as `[a, b, c]`.
#[must_use]
pub fn render(paths: &[PathBuf]) -> String {
    let mut out = String::from("[");
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", path.display());
    }
    out.push(']');
    out
}

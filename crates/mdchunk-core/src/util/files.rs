//! Glob-based file discovery.
//!
//! Content lives as a flat directory of markdown files. [`find_files`]
//! returns the regular files in a directory whose names match a glob
//! pattern, sorted by path so batch runs are deterministic.
//!
//! ```no_run
//! use std::path::Path;
//! use mdchunk_core::util::files::find_files;
//!
//! let chapters = find_files(Path::new("content"), "*.md").unwrap();
//! for path in chapters {
//!     println!("{}", path.display());
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default pattern for markdown content.
pub const DEFAULT_PATTERN: &str = "*.md";

/// Find regular files directly inside `dir` whose names match `pattern`.
///
/// The directory part is escaped, so only `pattern` is interpreted as a
/// glob. Results are sorted by path.
///
/// # Errors
///
/// - [`Error::FileRead`] if `dir` does not exist or is not a directory, or an
///   entry cannot be inspected
/// - [`Error::Config`] if `pattern` is not a valid glob
pub fn find_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::file_read(
            dir,
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );

    let entries = glob::glob(&full_pattern)
        .map_err(|e| Error::config(format!("Invalid file pattern '{pattern}': {e}")))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::file_read(path, e.into())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    log::debug!(
        "Found {} files matching '{}' in {}",
        files.len(),
        pattern,
        dir.display()
    );
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_find_files_matches_pattern_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ch2.md");
        touch(dir.path(), "ch1.md");
        touch(dir.path(), "notes.txt");

        let files = find_files(dir.path(), DEFAULT_PATTERN).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["ch1.md", "ch2.md"]);
    }

    #[test]
    fn test_find_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("drafts.md")).unwrap();
        touch(dir.path(), "ch1.md");

        let files = find_files(dir.path(), "*.md").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_find_files_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.md");

        let files = find_files(dir.path(), "*.md").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_files_escapes_directory() {
        let dir = TempDir::new().unwrap();
        let odd = dir.path().join("[draft]");
        fs::create_dir(&odd).unwrap();
        touch(&odd, "ch1.md");

        let files = find_files(&odd, "*.md").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_find_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = find_files(&dir.path().join("missing"), "*.md").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_find_files_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let err = find_files(dir.path(), "[*.md").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}

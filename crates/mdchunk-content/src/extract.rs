//! File and directory chunk extraction.
//!
//! [`extract_from_file`] is the full pipeline for one document: read, split
//! front matter, chunk by heading, and decorate every section with the file
//! name and the shared metadata. [`extract_from_dir`] runs it over every
//! matching file in a directory, isolating per-file failures.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mdchunk_content::extract::extract_from_dir;
//!
//! let batch = extract_from_dir(Path::new("content"), "*.md").unwrap();
//! println!(
//!     "{} chunks from {} files ({} failed)",
//!     batch.chunks.len(),
//!     batch.files_processed,
//!     batch.files_failed()
//! );
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mdchunk_core::{find_files, Error, Result};

use crate::markdown::{chunk_by_heading, split_front_matter};
use crate::types::Chunk;

/// Extract chunks from a markdown file.
///
/// Chunks come back in document order, each carrying the file name (not the
/// full path) and the same `Arc` of parsed metadata.
///
/// # Errors
///
/// - [`Error::FileRead`] if the file is missing, unreadable, or not UTF-8
/// - [`Error::MetadataParse`] if the front matter block is malformed; the
///   error carries `path`
pub fn extract_from_file(path: &Path) -> Result<Vec<Chunk>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
    let source_file = source_file_name(path);

    let chunks = extract_from_str(&source_file, &raw).map_err(|e| e.with_path(path))?;
    log::debug!("Extracted {} chunks from {}", chunks.len(), path.display());
    Ok(chunks)
}

/// Extract chunks from markdown text already in memory.
///
/// `source_file` is recorded verbatim on every chunk.
///
/// # Errors
///
/// Returns [`Error::MetadataParse`] if the front matter block is malformed.
///
/// # Example
///
/// ```rust
/// use mdchunk_content::extract::extract_from_str;
///
/// let chunks = extract_from_str("notes.md", "Preface.\n\n## Part One\n\nText.").unwrap();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].heading, "Intro");
/// assert!(chunks[0].metadata.is_empty());
/// assert!(chunks[0].shares_metadata_with(&chunks[1]));
/// ```
pub fn extract_from_str(source_file: &str, raw: &str) -> Result<Vec<Chunk>> {
    let (metadata, body) = split_front_matter(raw)?.into_parts();
    let metadata = Arc::new(metadata);

    Ok(chunk_by_heading(body)
        .into_iter()
        .map(|section| Chunk::from_section(section, source_file, &metadata))
        .collect())
}

fn source_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// A file whose extraction failed during a batch run.
#[derive(Debug)]
pub struct FileFailure {
    /// File that failed.
    pub path: PathBuf,
    /// Why it failed.
    pub error: Error,
}

/// Outcome of extracting a set of files.
///
/// Successful files contribute their chunks in file order; failed files are
/// recorded and do not affect the others.
#[derive(Debug, Default)]
pub struct BatchExtraction {
    /// Chunks from every successful file, in file order.
    pub chunks: Vec<Chunk>,
    /// Files that could not be extracted.
    pub failures: Vec<FileFailure>,
    /// Number of files attempted.
    pub files_processed: usize,
}

impl BatchExtraction {
    /// Record the outcome of one file.
    pub fn record(&mut self, path: PathBuf, result: Result<Vec<Chunk>>) {
        self.files_processed += 1;
        match result {
            Ok(chunks) => self.chunks.extend(chunks),
            Err(error) => {
                log::warn!("Skipping {}: {error}", path.display());
                self.failures.push(FileFailure { path, error });
            }
        }
    }

    /// Number of files that failed.
    pub fn files_failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if every file was extracted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extract chunks from every file in `dir` matching `pattern`.
///
/// Files are processed in sorted path order. A file that fails is logged and
/// recorded in [`BatchExtraction::failures`].
///
/// # Errors
///
/// Fails as a whole only when the files cannot be listed: `dir` is not a
/// readable directory ([`Error::FileRead`]) or `pattern` is not a valid glob
/// ([`Error::Config`]).
pub fn extract_from_dir(dir: &Path, pattern: &str) -> Result<BatchExtraction> {
    let files = find_files(dir, pattern)?;

    let mut batch = BatchExtraction::default();
    for path in files {
        let result = extract_from_file(&path);
        batch.record(path, result);
    }

    log::info!(
        "Extracted {} chunks from {} files in {} ({} failed)",
        batch.chunks.len(),
        batch.files_processed,
        dir.display(),
        batch.files_failed()
    );
    Ok(batch)
}

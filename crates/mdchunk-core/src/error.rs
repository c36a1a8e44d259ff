//! Error types for mdchunk.
//!
//! Extraction recognizes two failure kinds: a file that cannot be read as
//! UTF-8 text, and a front-matter block that is not a valid YAML mapping.
//! Neither is recovered locally; both abort the extraction of that one file.

use std::path::{Path, PathBuf};

/// Result type alias for mdchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting chunks.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// File missing, unreadable, or not valid UTF-8.
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Front-matter block present but not a valid YAML mapping.
    #[error("Metadata parse error{}: {message}", location(.path))]
    MetadataParse {
        /// File the block came from, when known
        path: Option<PathBuf>,
        /// What went wrong
        message: String,
    },

    /// Configuration error (bad config file, invalid glob pattern, etc.)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates a file read error for `path`.
    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a metadata parse error without a file location.
    pub fn metadata_parse<S: Into<String>>(message: S) -> Self {
        Error::MetadataParse {
            path: None,
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Attaches a file path to a [`Error::MetadataParse`] that has none.
    ///
    /// Other variants are returned unchanged.
    pub fn with_path(self, file: impl AsRef<Path>) -> Self {
        match self {
            Error::MetadataParse {
                path: None,
                message,
            } => Error::MetadataParse {
                path: Some(file.as_ref().to_path_buf()),
                message,
            },
            other => other,
        }
    }

    /// Returns the file path associated with this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::FileRead { path, .. } => Some(path),
            Error::MetadataParse { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

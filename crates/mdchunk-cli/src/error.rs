//! Error types for mdchunk-cli

use thiserror::Error;

/// Result type alias for mdchunk-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mdchunk-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from mdchunk-core
    #[error(transparent)]
    Core(#[from] mdchunk_core::Error),

    /// A per-file extraction task panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Writing output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Chunk serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

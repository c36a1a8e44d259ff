//! Chunk records produced by extraction.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Parsed front matter: string keys to arbitrary YAML values.
///
/// Empty when a document has no front matter block.
pub type Metadata = serde_yaml::Mapping;

/// One heading-delimited section of a markdown body.
///
/// This is what the heading chunker produces; [`Chunk`] adds the source
/// file and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading title, or `"Intro"` for text before the first heading.
    pub heading: String,
    /// Trimmed section text, including its heading line when present.
    pub content: String,
}

impl Section {
    /// Create a section from a heading title and raw section text.
    ///
    /// The content is trimmed of surrounding whitespace.
    pub fn new(heading: impl Into<String>, content: &str) -> Self {
        Self {
            heading: heading.into(),
            content: content.trim().to_string(),
        }
    }
}

/// An extracted section of a markdown file, ready for downstream indexing.
///
/// All chunks from one file hold the same `Arc<Metadata>`; the front matter
/// is parsed once per file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Heading title, or `"Intro"` for text before the first heading.
    pub heading: String,
    /// Trimmed section text, including its heading line when present.
    pub content: String,
    /// File name of the originating document (no directory part).
    pub source_file: String,
    /// Front matter of the originating document.
    pub metadata: Arc<Metadata>,
}

impl Chunk {
    /// Decorate a section with its source file and document metadata.
    pub fn from_section(section: Section, source_file: &str, metadata: &Arc<Metadata>) -> Self {
        Self {
            heading: section.heading,
            content: section.content,
            source_file: source_file.to_string(),
            metadata: Arc::clone(metadata),
        }
    }

    /// Get a string field from the chunk's metadata.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)?.as_str()
    }

    /// Returns `true` if both chunks share the same parsed metadata.
    pub fn shares_metadata_with(&self, other: &Chunk) -> bool {
        Arc::ptr_eq(&self.metadata, &other.metadata)
    }
}

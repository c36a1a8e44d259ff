//! Front matter splitting, heading chunking, and chunk extraction.
//!
//! This crate turns markdown files into ordered [`Chunk`] records. The
//! pipeline is linear and stateless:
//!
//! 1. [`split_front_matter`] separates the leading `---` YAML block from the body
//! 2. [`chunk_by_heading`] splits the body before every `## ` heading line
//! 3. [`extract_from_file`] reads a file, runs both steps, and tags every
//!    section with the file name and the (shared) parsed metadata
//!
//! # Modules
//!
//! - [`markdown`]: Front matter and heading parsing
//!   - [`markdown::frontmatter`]: YAML front matter splitting
//!   - [`markdown::chunker`]: Level-two heading segmentation
//! - [`extract`]: File and directory extraction
//! - [`types`]: `Chunk`, `Section`, and `Metadata`
//!
//! # Example
//!
//! ```rust
//! use mdchunk_content::extract_from_str;
//!
//! let raw = "---\ntitle: Test Chapter\n---\n\n## Heading One\n\nContent under heading one.\n";
//! let chunks = extract_from_str("ch1.md", raw).unwrap();
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].heading, "Heading One");
//! assert_eq!(chunks[0].source_file, "ch1.md");
//! assert_eq!(chunks[0].metadata_str("title"), Some("Test Chapter"));
//! ```

pub mod extract;
pub mod markdown;
pub mod types;

#[cfg(test)]
mod proptests;

// Re-export commonly used types
pub use extract::{
    extract_from_dir, extract_from_file, extract_from_str, BatchExtraction, FileFailure,
};
pub use markdown::{
    chunk_by_heading, is_section_heading, split_front_matter, strip_front_matter, FrontMatter,
    INTRO_HEADING,
};
pub use types::{Chunk, Metadata, Section};

pub use mdchunk_core::{Error, Result};

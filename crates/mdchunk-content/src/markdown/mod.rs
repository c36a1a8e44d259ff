//! Markdown front matter and heading parsing.
//!
//! - [`frontmatter`]: Split the leading `---` YAML block from the body
//! - [`chunker`]: Split a body into sections at level-two headings
//!
//! # Example
//!
//! ```rust
//! use mdchunk_content::markdown::{chunk_by_heading, split_front_matter};
//!
//! let raw = "---\nslug: intro\n---\nOpening words.\n\n## Setup\n\nInstall it.";
//! let front = split_front_matter(raw).unwrap();
//! assert_eq!(front.get_str("slug"), Some("intro"));
//!
//! let sections = chunk_by_heading(front.body());
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].heading, "Intro");
//! assert_eq!(sections[1].heading, "Setup");
//! ```

pub mod chunker;
pub mod frontmatter;

// Re-export key types and functions
pub use chunker::{chunk_by_heading, is_section_heading, INTRO_HEADING};
pub use frontmatter::{parse_metadata, split_front_matter, strip_front_matter, FrontMatter};

//! YAML front matter splitting.
//!
//! Front matter is a metadata block at the very start of a markdown file,
//! delimited by lines containing exactly `---`:
//!
//! ```markdown
//! ---
//! title: Test Chapter
//! slug: test-chapter
//! ---
//!
//! ## Heading One
//! ```
//!
//! The opening delimiter must be the first line of the input. The block ends
//! at the first following line that is exactly `---` and is terminated by a
//! newline. Everything after that newline is the body.
//!
//! # Usage
//!
//! ```rust
//! use mdchunk_content::markdown::split_front_matter;
//!
//! let raw = "---\ntitle: Test\n---\n\nBody";
//! let front = split_front_matter(raw).unwrap();
//!
//! assert!(front.has_front_matter());
//! assert_eq!(front.get_str("title"), Some("Test"));
//! assert_eq!(front.body(), "\nBody");
//! ```

use std::sync::LazyLock;

use mdchunk_core::{Error, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::types::Metadata;

static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n").expect("Invalid front matter regex"));

/// Result of front matter splitting.
///
/// Holds the parsed metadata (empty when there was no block) and the body
/// text that follows the closing delimiter.
#[derive(Debug, Clone)]
pub struct FrontMatter<'a> {
    metadata: Metadata,
    body: &'a str,
    had_block: bool,
}

impl<'a> FrontMatter<'a> {
    fn with_block(metadata: Metadata, body: &'a str) -> Self {
        Self {
            metadata,
            body,
            had_block: true,
        }
    }

    fn without_block(body: &'a str) -> Self {
        Self {
            metadata: Metadata::new(),
            body,
            had_block: false,
        }
    }

    /// Check if a delimited front matter block was found.
    pub fn has_front_matter(&self) -> bool {
        self.had_block
    }

    /// Get the parsed metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Get the body (everything after the front matter block).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Split into owned metadata and the body slice.
    pub fn into_parts(self) -> (Metadata, &'a str) {
        (self.metadata, self.body)
    }

    /// Get a string field from the metadata.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)?.as_str()
    }

    /// Get a string list field from the metadata.
    ///
    /// Returns an empty vec if the field is missing or not a sequence.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.metadata
            .get(key)
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Deserialize the metadata into a caller-defined type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mdchunk_content::markdown::split_front_matter;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Chapter {
    ///     title: String,
    ///     #[serde(default)]
    ///     tags: Vec<String>,
    /// }
    ///
    /// let raw = "---\ntitle: Hello\ntags: [a, b]\n---\nBody";
    /// let chapter: Chapter = split_front_matter(raw).unwrap().deserialize().unwrap();
    /// assert_eq!(chapter.title, "Hello");
    /// assert_eq!(chapter.tags, vec!["a", "b"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetadataParse`] if the metadata does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_yaml::from_value(Value::Mapping(self.metadata.clone()))
            .map_err(|e| Error::metadata_parse(format!("Failed to deserialize front matter: {e}")))
    }
}

/// Split YAML front matter from markdown text.
///
/// # Behavior
///
/// - No block at the start of the input: empty metadata, body is the input unchanged
/// - Block present: metadata parsed from the block, body is the text after
///   the closing delimiter line
///
/// # Errors
///
/// Returns [`Error::MetadataParse`] if the block is not valid YAML or is not
/// a mapping.
///
/// # Example
///
/// ```rust
/// use mdchunk_content::markdown::split_front_matter;
///
/// let front = split_front_matter("## Just Markdown").unwrap();
/// assert!(!front.has_front_matter());
/// assert!(front.metadata().is_empty());
/// assert_eq!(front.body(), "## Just Markdown");
/// ```
pub fn split_front_matter(raw: &str) -> Result<FrontMatter<'_>> {
    let Some(caps) = FRONT_MATTER_RE.captures(raw) else {
        return Ok(FrontMatter::without_block(raw));
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body_start = caps.get(0).map_or(0, |m| m.end());

    let metadata = parse_metadata(block)?;
    Ok(FrontMatter::with_block(metadata, &raw[body_start..]))
}

/// Parse the text of a front matter block into [`Metadata`].
///
/// A block that is blank or parses to YAML null yields empty metadata.
///
/// # Errors
///
/// Returns [`Error::MetadataParse`] for invalid YAML, for YAML whose top
/// level is not a mapping, and for any mapping key (nested ones included)
/// that is not a string.
pub fn parse_metadata(block: &str) -> Result<Metadata> {
    if block.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| Error::metadata_parse(format!("Invalid front matter YAML: {e}")))?;

    match value {
        Value::Mapping(mapping) => {
            check_string_keys(&mapping)?;
            Ok(mapping)
        }
        Value::Null => Ok(Metadata::new()),
        Value::Sequence(_) => Err(Error::metadata_parse(
            "Front matter must be a mapping, found a sequence",
        )),
        _ => Err(Error::metadata_parse(
            "Front matter must be a mapping, found a scalar",
        )),
    }
}

fn check_string_keys(mapping: &Metadata) -> Result<()> {
    for (key, value) in mapping {
        if !key.is_string() {
            return Err(Error::metadata_parse(format!(
                "Front matter keys must be strings, found {}",
                describe(key)
            )));
        }
        check_nested_keys(value)?;
    }
    Ok(())
}

fn check_nested_keys(value: &Value) -> Result<()> {
    match value {
        Value::Mapping(mapping) => check_string_keys(mapping),
        Value::Sequence(items) => items.iter().try_for_each(check_nested_keys),
        Value::Tagged(tagged) => check_nested_keys(&tagged.value),
        _ => Ok(()),
    }
}

fn describe(key: &Value) -> &'static str {
    match key {
        Value::Null => "a null key",
        Value::Bool(_) => "a boolean key",
        Value::Number(_) => "a numeric key",
        Value::Sequence(_) => "a sequence key",
        Value::Mapping(_) => "a mapping key",
        _ => "a tagged key",
    }
}

/// Strip front matter, returning only the body.
///
/// Falls back to the whole input if the block cannot be parsed.
///
/// ```rust
/// use mdchunk_content::markdown::strip_front_matter;
///
/// let body = strip_front_matter("---\ntitle: Test\n---\n## Heading");
/// assert_eq!(body, "## Heading");
/// ```
pub fn strip_front_matter(raw: &str) -> &str {
    split_front_matter(raw).map(|f| f.body()).unwrap_or(raw)
}

// ============================================================================
// Tests
// ============================================================================

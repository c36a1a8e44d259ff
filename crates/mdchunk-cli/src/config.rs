//! Configuration for the mdchunk CLI.
//!
//! Settings come from a TOML file and are then overridden by command-line
//! flags:
//!
//! ```toml
//! content_dir = "content"
//! pattern = "*.md"
//! format = "json"
//! strict = false
//! ```
//!
//! Resolution order for the file: the `--config` path (must exist), then
//! `mdchunk.toml` in the working directory if present, then built-in
//! defaults.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use mdchunk_core::Error;
use mdchunk_core::util::files::DEFAULT_PATTERN;
use serde::Deserialize;

use crate::Result;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mdchunk.toml";

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// How chunks are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single pretty-printed JSON array.
    #[default]
    Json,
    /// One compact JSON object per line.
    Jsonl,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MdchunkConfig {
    /// Directory extracted when no paths are given.
    pub content_dir: PathBuf,
    /// Glob applied to file names inside directories.
    pub pattern: String,
    /// Output format.
    pub format: OutputFormat,
    /// Exit non-zero if any file fails.
    pub strict: bool,
}

impl Default for MdchunkConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            format: OutputFormat::default(),
            strict: false,
        }
    }
}

impl MdchunkConfig {
    /// Load configuration, resolving the file as described in the module docs.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_in(config_path, Path::new("."))
    }

    /// Like [`MdchunkConfig::load`], looking for [`DEFAULT_CONFIG_FILE`] in
    /// `dir` instead of the working directory.
    pub fn load_in(config_path: Option<&Path>, dir: &Path) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let local = dir.join(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Self::from_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            crate::Error::Core(Error::Config { message }) => {
                Error::config(format!("{}: {message}", path.display())).into()
            }
            other => other,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")).into())
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(
        &mut self,
        content_dir: Option<PathBuf>,
        pattern: Option<String>,
        format: Option<OutputFormat>,
        strict: bool,
    ) {
        if let Some(dir) = content_dir {
            self.content_dir = dir;
        }
        if let Some(pattern) = pattern {
            self.pattern = pattern;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self.strict |= strict;
    }
}

//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// mdchunk - extract heading chunks and front matter from markdown files
#[derive(Parser, Debug)]
#[command(name = "mdchunk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content directory used when no paths are given
    #[arg(long, env = "MDCHUNK_CONTENT_DIR", global = true)]
    pub content_dir: Option<PathBuf>,

    /// Glob applied to file names inside directories
    #[arg(short, long, global = true)]
    pub pattern: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract chunks from files and directories and print them as JSON
    Extract {
        /// Markdown files or directories (defaults to the content directory)
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Exit with an error if any file fails to extract
        #[arg(long)]
        strict: bool,
    },
    /// List the files an extraction run would process
    List {
        /// Directory to scan (defaults to the content directory)
        dir: Option<PathBuf>,
    },
}

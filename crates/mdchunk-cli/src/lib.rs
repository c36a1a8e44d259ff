//! # mdchunk-cli
//!
//! Command-line front end for mdchunk:
//! - `mdchunk extract` prints chunks from files and directories as JSON
//! - `mdchunk list` shows which files a directory run would process
//!
//! Files are extracted concurrently, one blocking task per file, and
//! printed in discovery order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::{MdchunkConfig, OutputFormat};
pub use error::{Error, Result};

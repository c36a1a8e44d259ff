//! mdchunk Core — shared error types and file utilities.
//!
//! This crate provides the foundational types used across all mdchunk crates.
//! It has no internal mdchunk dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File discovery utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

pub use util::files::find_files;

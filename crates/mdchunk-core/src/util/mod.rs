//! Utility modules.
//!
//! - [`files`]: Glob-based file discovery

pub mod files;

//! Folder map document assembly and output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `markdown` - The `FolderMap` document and its writers

mod config;
mod markdown;

pub use config::{DEFAULT_OUTPUT, OutputConfig};
pub use markdown::{FolderMap, print_map, write_map};

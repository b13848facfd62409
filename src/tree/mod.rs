//! Directory tree rendering
//!
//! `TreeBuilder` walks a directory depth-first and produces one display line
//! per surviving entry, with `├── `/`└── ` connectors and `│   `/four-space
//! continuation prefixes that compound with depth.

mod builder;
mod config;
mod filter;
mod utils;

// Re-export public types
pub use builder::{TreeBuilder, build_tree};
pub use config::{EXCLUDED_NAMES, TreeConfig};
pub use filter::{EntryFilter, is_excluded, is_hidden};
pub use utils::{LAST_CONNECTOR, MID_CONNECTOR, base_name, child_prefix, connector};

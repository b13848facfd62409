//! Shared helpers for tree rendering

use std::io;
use std::path::Path;

/// Connector for the last sibling at a level.
pub const LAST_CONNECTOR: &str = "└── ";
/// Connector for every other sibling.
pub const MID_CONNECTOR: &str = "├── ";

/// Get the display name of a path.
///
/// This is the final component; paths without one (such as `/`) display as
/// themselves.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CONNECTOR } else { MID_CONNECTOR }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}

/// Attach the offending path to an I/O error.
pub fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

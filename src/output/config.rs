//! Output configuration types

use crate::tree::TreeConfig;

/// Default name of the generated file.
pub const DEFAULT_OUTPUT: &str = "folder-map.md";

/// Configuration for building a folder map document.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Text used in the `# <title>` header line, normally the output file name
    pub title: String,
    pub tree: TreeConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_OUTPUT.to_string(),
            tree: TreeConfig::default(),
        }
    }
}

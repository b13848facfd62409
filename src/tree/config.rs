//! Configuration types for the tree builder

/// Names that never appear in a folder map, whatever the other settings are.
pub const EXCLUDED_NAMES: &[&str] = &["node_modules", env!("CARGO_PKG_NAME")];

/// Configuration for tree building behavior.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Drop entries whose name starts with `.`
    pub ignore_hidden: bool,
    /// Extra glob patterns matched against base names
    pub ignore_patterns: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            ignore_hidden: true,
            ignore_patterns: Vec::new(),
        }
    }
}

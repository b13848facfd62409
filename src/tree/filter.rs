//! Entry filtering for tree building

use glob::Pattern;

use super::config::{EXCLUDED_NAMES, TreeConfig};

/// Decides which base names are left out of the map.
///
/// Patterns are compiled once up front. A pattern that is not a valid glob
/// still matches a base name equal to it.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    ignore_hidden: bool,
    patterns: Vec<(String, Option<Pattern>)>,
}

impl EntryFilter {
    pub fn new(config: &TreeConfig) -> Self {
        let patterns = config
            .ignore_patterns
            .iter()
            .map(|p| (p.clone(), Pattern::new(p).ok()))
            .collect();
        Self {
            ignore_hidden: config.ignore_hidden,
            patterns,
        }
    }

    /// Check if an entry with this base name should be shown.
    pub fn is_included(&self, name: &str) -> bool {
        if self.ignore_hidden && is_hidden(name) {
            return false;
        }
        if is_excluded(name) {
            return false;
        }
        !self.matches_ignore_pattern(name)
    }

    fn matches_ignore_pattern(&self, name: &str) -> bool {
        self.patterns.iter().any(|(raw, compiled)| {
            raw == name || compiled.as_ref().is_some_and(|p| p.matches(name))
        })
    }
}

/// Hidden entries start with a dot.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check the fixed exclusion set.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}

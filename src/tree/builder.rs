//! TreeBuilder - renders a directory subtree into display lines

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::annotations::AnnotationTable;

use super::config::TreeConfig;
use super::filter::EntryFilter;
use super::utils::{base_name, child_prefix, connector, with_path};

/// Builds the display lines of a subtree.
///
/// Symbolic links to directories are followed. A directory whose canonical
/// path is already one of its own ancestors is listed but not expanded, so
/// link cycles terminate.
pub struct TreeBuilder<'a> {
    filter: EntryFilter,
    annotations: &'a AnnotationTable,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(config: &TreeConfig, annotations: &'a AnnotationTable) -> Self {
        Self {
            filter: EntryFilter::new(config),
            annotations,
        }
    }

    /// Render `path` and everything below it.
    ///
    /// Returns no lines at all when `path` itself is filtered out.
    pub fn build(&self, path: &Path, prefix: &str, is_last: bool) -> io::Result<Vec<String>> {
        let mut ancestors = seed_ancestors(path);
        let mut lines = Vec::new();
        self.build_into(path, prefix, is_last, &mut ancestors, &mut lines)?;
        Ok(lines)
    }

    fn build_into(
        &self,
        path: &Path,
        prefix: &str,
        is_last: bool,
        ancestors: &mut Vec<PathBuf>,
        lines: &mut Vec<String>,
    ) -> io::Result<()> {
        let name = base_name(path);
        if !self.filter.is_included(&name) {
            trace!(path = %path.display(), "filtered out");
            return Ok(());
        }

        lines.push(format!(
            "{}{}{}{}",
            prefix,
            connector(is_last),
            name,
            self.annotations.comment_suffix(&name)
        ));

        if !is_dir(path)? {
            return Ok(());
        }

        let canonical = fs::canonicalize(path).map_err(|e| with_path(e, path))?;
        if ancestors.contains(&canonical) {
            debug!(
                path = %path.display(),
                target = %canonical.display(),
                "not expanding link cycle"
            );
            return Ok(());
        }

        let children = self.read_children(path)?;
        let extension = child_prefix(prefix, is_last);
        let count = children.len();
        ancestors.push(canonical);
        for (idx, child) in children.iter().enumerate() {
            self.build_into(child, &extension, idx + 1 == count, ancestors, lines)?;
        }
        ancestors.pop();
        Ok(())
    }

    /// Read, filter, and sort the entries of a directory.
    ///
    /// Filtering happens before the caller indexes the result, so dropped
    /// entries never decide which sibling is last.
    pub fn read_children(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| with_path(e, dir))? {
            let entry = entry.map_err(|e| with_path(e, dir))?;
            let name = entry.file_name();
            if self.filter.is_included(&name.to_string_lossy()) {
                entries.push(entry);
            }
        }
        entries.sort_by_key(|a| a.file_name());
        debug!(dir = %dir.display(), entries = entries.len(), "listed directory");
        Ok(entries.into_iter().map(|e| e.path()).collect())
    }
}

/// Directories recurse, including those reached through a symlink.
///
/// A dangling symlink is a leaf; a path that does not exist at all is an error.
fn is_dir(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) => match fs::symlink_metadata(path) {
            Ok(_) => Ok(false),
            Err(_) => Err(with_path(e, path)),
        },
    }
}

/// Canonical directories above `path`, nearest last.
fn seed_ancestors(path: &Path) -> Vec<PathBuf> {
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Vec::new(),
    };
    let Ok(parent) = fs::canonicalize(parent) else {
        return Vec::new();
    };
    let mut ancestors: Vec<PathBuf> = parent.ancestors().map(Path::to_path_buf).collect();
    ancestors.reverse();
    ancestors
}

/// Render a subtree with a one-off builder.
pub fn build_tree(
    path: &Path,
    prefix: &str,
    is_last: bool,
    config: &TreeConfig,
    annotations: &AnnotationTable,
) -> io::Result<Vec<String>> {
    TreeBuilder::new(config, annotations).build(path, prefix, is_last)
}

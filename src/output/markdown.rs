//! Markdown folder map document
//!
//! This module provides `FolderMap`, which holds the complete document as
//! lines: a `# <title>` header, a blank line, the `  /<root>` line, and then
//! the tree of every surviving root entry.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tracing::info;

use crate::annotations::AnnotationTable;
use crate::tree::{TreeBuilder, base_name};

use super::config::OutputConfig;

/// Prefix of the root line and of every top-level entry.
const ROOT_INDENT: &str = "  ";

/// A fully rendered folder map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderMap {
    root: PathBuf,
    lines: Vec<String>,
}

impl FolderMap {
    /// Walk `root` and render the whole document in memory.
    ///
    /// The root is made absolute without resolving symlinks, so the header
    /// shows the name that was passed in. The root itself is never filtered,
    /// only its entries are.
    pub fn build(
        root: &Path,
        config: &OutputConfig,
        annotations: &AnnotationTable,
    ) -> io::Result<Self> {
        let root = absolute_root(root)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", root.display(), e)))?;

        let mut lines = vec![
            format!("# {}", config.title),
            String::new(),
            format!("{}/{}", ROOT_INDENT, base_name(&root)),
        ];

        let builder = TreeBuilder::new(&config.tree, annotations);
        let children = builder.read_children(&root)?;
        let count = children.len();
        for (idx, child) in children.iter().enumerate() {
            lines.extend(builder.build(child, ROOT_INDENT, idx + 1 == count)?);
        }

        info!(root = %root.display(), lines = lines.len(), "built folder map");
        Ok(Self { root, lines })
    }

    /// The resolved root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the document with every line newline-terminated.
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

/// Make `root` absolute and fold away `.` and `..` components lexically.
///
/// Fails when the resulting path does not exist.
fn absolute_root(root: &Path) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in std::path::absolute(root)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    fs::metadata(&resolved)?;
    Ok(resolved)
}

/// Write the map to `path` in a single pass, replacing any existing file.
pub fn write_map(map: &FolderMap, path: &Path) -> io::Result<()> {
    fs::write(path, map.render())
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

/// Print the map to stdout.
pub fn print_map(map: &FolderMap) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(map.render().as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;
    use crate::tree::TreeConfig;

    fn scenario() -> TestDir {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        dir.add_file(".secret", "");
        dir.add_file("node_modules/left-pad/index.js", "");
        dir.add_file("package.json", "{}");
        dir
    }

    fn tree_lines(map: &FolderMap) -> Vec<&str> {
        map.lines()[3..].iter().map(String::as_str).collect()
    }

    #[test]
    fn test_header() {
        let dir = TestDir::new();
        let root = dir.add_dir("my_project");
        let map = FolderMap::build(&root, &OutputConfig::default(), &AnnotationTable::empty())
            .unwrap();
        assert_eq!(map.lines(), ["# folder-map.md", "", "  /my_project"]);
        assert_eq!(map.render(), "# folder-map.md\n\n  /my_project\n");
    }

    #[test]
    fn test_default_filtering_scenario() {
        let dir = scenario();
        let map = FolderMap::build(
            dir.path(),
            &OutputConfig::default(),
            &AnnotationTable::builtin(),
        )
        .unwrap();
        assert_eq!(
            tree_lines(&map),
            [
                "  ├── a.txt",
                "  └── package.json  # Dependências e scripts principais (monorepo)",
            ]
        );
    }

    #[test]
    fn test_hidden_shown_scenario() {
        let dir = scenario();
        let config = OutputConfig {
            tree: TreeConfig {
                ignore_hidden: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let map = FolderMap::build(dir.path(), &config, &AnnotationTable::builtin()).unwrap();
        assert_eq!(
            tree_lines(&map),
            [
                "  ├── .secret",
                "  ├── a.txt",
                "  └── package.json  # Dependências e scripts principais (monorepo)",
            ]
        );
    }

    #[test]
    fn test_hidden_root_is_still_mapped() {
        let dir = TestDir::new();
        dir.add_file(".dotfiles/vimrc", "");
        let map = FolderMap::build(
            &dir.path().join(".dotfiles"),
            &OutputConfig::default(),
            &AnnotationTable::empty(),
        )
        .unwrap();
        assert_eq!(map.lines()[2], "  /.dotfiles");
        assert_eq!(tree_lines(&map), ["  └── vimrc"]);
    }

    #[test]
    fn test_relative_root_resolved() {
        let dir = TestDir::new();
        dir.add_file("proj/sub/x.rs", "");
        let root = dir.path().join("proj/sub/..");
        let map = FolderMap::build(&root, &OutputConfig::default(), &AnnotationTable::empty())
            .unwrap();
        assert_eq!(map.lines()[2], "  /proj");
        assert!(map.root().is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_keeps_link_name() {
        let dir = TestDir::new();
        dir.add_file("real_project/index.js", "");
        let alias = dir.path().join("alias");
        std::os::unix::fs::symlink(dir.path().join("real_project"), &alias).unwrap();

        let map = FolderMap::build(&alias, &OutputConfig::default(), &AnnotationTable::empty())
            .unwrap();
        assert_eq!(map.lines()[2], "  /alias");
        assert_eq!(map.root(), alias.as_path());
        assert_eq!(tree_lines(&map), ["  └── index.js"]);
    }

    #[test]
    fn test_write_map_overwrites() {
        let dir = scenario();
        let out = TestDir::new();
        let target = out.add_file("folder-map.md", "stale content that is longer than the map");
        let map = FolderMap::build(
            dir.path(),
            &OutputConfig::default(),
            &AnnotationTable::builtin(),
        )
        .unwrap();
        write_map(&map, &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), map.render());
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = TestDir::new();
        let err = FolderMap::build(
            &dir.path().join("absent"),
            &OutputConfig::default(),
            &AnnotationTable::empty(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

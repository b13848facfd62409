//! Foldermap - write an annotated ASCII tree of a project into a Markdown file

pub mod annotations;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use annotations::AnnotationTable;
pub use output::{FolderMap, print_map, write_map};
pub use tree::{TreeBuilder, TreeConfig, build_tree};

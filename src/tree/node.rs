// src/tree/node.rs
// =============================================================================
// This module holds the in-memory directory tree built from a path list.
//
// How it works:
// 1. Sort the paths so grouping and insertion order are deterministic
// 2. Split every path on '/' into segments
// 3. Walk from the root, creating directories as needed
// 4. The final segment becomes a File
//
// Each level is a BTreeMap, so children are always kept in plain
// lexicographic order and printing never has to re-sort.
// =============================================================================

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while building a tree from paths.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The same name is used both as a file and as a directory,
    /// e.g. `"a"` together with `"a/b"`.
    #[error("Path '{path}' conflicts with an existing file or directory")]
    Conflict { path: String },

    /// The path is empty or contains an empty segment (`"a//b"`, `"/a"`).
    #[error("Path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    /// Writing the rendered tree failed.
    #[error("Failed to write tree: {0}")]
    Io(#[from] std::io::Error),
}

/// One entry in the tree: either a file (leaf) or a directory with children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File,
    Directory(BTreeMap<String, Node>),
}

/// The anonymous root of a directory tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileTree {
    root: BTreeMap<String, Node>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a path list.
    ///
    /// The list is sorted first (by full path string), then every path is
    /// inserted. Duplicate paths are fine; they collapse into one file.
    pub fn from_paths(mut paths: Vec<String>) -> Result<Self, TreeError> {
        paths.sort();

        let mut tree = Self::new();
        for path in &paths {
            tree.insert(path)?;
        }

        Ok(tree)
    }

    /// Inserts one `/`-separated file path.
    pub fn insert(&mut self, path: &str) -> Result<(), TreeError> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(TreeError::EmptySegment { path: path.to_string() });
        }

        // split() always yields at least one item, so this never fails
        let Some((file_name, dirs)) = segments.split_last() else {
            return Err(TreeError::EmptySegment { path: path.to_string() });
        };

        let mut level = &mut self.root;
        for dir in dirs {
            let child = level
                .entry(dir.to_string())
                .or_insert_with(|| Node::Directory(BTreeMap::new()));

            level = match child {
                Node::Directory(children) => children,
                Node::File => return Err(TreeError::Conflict { path: path.to_string() }),
            };
        }

        match level.get(*file_name) {
            Some(Node::Directory(_)) => Err(TreeError::Conflict { path: path.to_string() }),
            Some(Node::File) => Ok(()),
            None => {
                level.insert(file_name.to_string(), Node::File);
                Ok(())
            }
        }
    }

    /// Top-level entries, in lexicographic order.
    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    /// Number of files (leaves) anywhere in the tree.
    pub fn file_count(&self) -> usize {
        fn count(level: &BTreeMap<String, Node>) -> usize {
            level
                .values()
                .map(|node| match node {
                    Node::File => 1,
                    Node::Directory(children) => count(children),
                })
                .sum()
        }

        count(&self.root)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum instead of a map of maps?
//    - Node::File and Node::Directory make "is this a file?" a pattern match
//      instead of checking whether a map happens to be empty
//
// 2. Why is `level` reassigned inside the loop?
//    - `level` is a mutable borrow of the current directory's children
//    - Each step replaces it with a borrow of the next directory down,
//      which the borrow checker accepts because the old borrow is no
//      longer used
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_builds_nested_directories() {
        let tree = FileTree::from_paths(paths(&["file1.txt", "folder1/folder2/file3.txt"])).unwrap();

        assert_eq!(tree.children().get("file1.txt"), Some(&Node::File));

        let Some(Node::Directory(folder1)) = tree.children().get("folder1") else {
            panic!("folder1 should be a directory");
        };
        let Some(Node::Directory(folder2)) = folder1.get("folder2") else {
            panic!("folder2 should be a directory");
        };
        assert_eq!(folder2["file3.txt"], Node::File);
    }

    #[test]
    fn test_duplicate_paths_are_idempotent() {
        let once = FileTree::from_paths(paths(&["src/main.rs", "README.md"])).unwrap();
        let twice = FileTree::from_paths(paths(&["src/main.rs", "README.md", "src/main.rs"])).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.file_count(), 2);
    }

    #[test]
    fn test_file_then_directory_conflict() {
        let result = FileTree::from_paths(paths(&["a", "a/b"]));
        assert!(matches!(result, Err(TreeError::Conflict { path }) if path == "a/b"));
    }

    #[test]
    fn test_directory_then_file_conflict() {
        let mut tree = FileTree::new();
        tree.insert("a/b").unwrap();

        let result = tree.insert("a");
        assert!(matches!(result, Err(TreeError::Conflict { path }) if path == "a"));
    }

    #[test]
    fn test_empty_segments_rejected() {
        for bad in ["", "a//b", "/a", "a/"] {
            let mut tree = FileTree::new();
            assert!(
                matches!(tree.insert(bad), Err(TreeError::EmptySegment { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_file_count_matches_unique_paths() {
        let input = paths(&["b.txt", "a/x.rs", "a/y.rs", "a/deep/z.rs", "c/d/e/f.md"]);
        let tree = FileTree::from_paths(input.clone()).unwrap();
        assert_eq!(tree.file_count(), input.len());
    }

    #[test]
    fn test_empty_list_gives_empty_tree() {
        let tree = FileTree::from_paths(Vec::new()).unwrap();
        assert!(tree.children().is_empty());
        assert_eq!(tree.file_count(), 0);
    }
}

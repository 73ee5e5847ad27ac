// src/tree/render.rs
// =============================================================================
// This module prints a FileTree depth-first with box-drawing connectors.
//
// Formatting rules:
// - The last child at a level gets "└── ", its descendants are indented
//   with four spaces
// - Every other child gets "├── ", its descendants are indented with
//   "│   " so the vertical branch keeps going
// - Files count as 1; directories only add up what is below them
//
// Rust concepts:
// - Generic writers (impl Write): the same code prints to stdout or into
//   a Vec<u8> inside tests
// - Recursion over a recursive enum
// =============================================================================

use super::node::{FileTree, Node, TreeError};
use std::collections::BTreeMap;
use std::io::{self, Write};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

impl FileTree {
    /// Writes the tree (without the total line) and returns how many files
    /// were printed.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        write_level(self.children(), "", out)
    }
}

fn write_level<W: Write>(level: &BTreeMap<String, Node>, indent: &str, out: &mut W) -> io::Result<usize> {
    let mut file_count = 0;
    let last_index = level.len().saturating_sub(1);

    for (i, (name, node)) in level.iter().enumerate() {
        let (connector, child_indent) = if i == last_index {
            (LAST_BRANCH, SPACE_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };

        writeln!(out, "{}{}{}", indent, connector, name)?;

        file_count += match node {
            Node::File => 1,
            Node::Directory(children) => {
                let next_indent = format!("{}{}", indent, child_indent);
                write_level(children, &next_indent, out)?
            }
        };
    }

    Ok(file_count)
}

/// Builds a tree from `paths`, writes it to `out`, then writes the
/// blank line and the `Total number of files: N` summary.
pub fn render<W: Write>(paths: Vec<String>, out: &mut W) -> Result<usize, TreeError> {
    let tree = FileTree::from_paths(paths)?;
    let total = tree.write_to(out)?;
    debug_assert_eq!(total, tree.file_count());

    tracing::debug!(total, "rendered tree");

    writeln!(out)?;
    writeln!(out, "Total number of files: {}", total)?;
    out.flush()?;

    Ok(total)
}

/// Same as `render`, but prints to stdout.
pub fn print_tree(paths: Vec<String>) -> Result<usize, TreeError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render(paths, &mut handle)
}

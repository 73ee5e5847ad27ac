// src/tree/mod.rs
// =============================================================================
// This module turns a flat list of file paths into a directory tree and
// prints it to the terminal.
//
// Submodules:
// - node: The recursive tree type and how paths are inserted into it
// - render: Depth-first printing with box-drawing connectors
//
// Example output:
//   ├── file1.txt
//   └── folder1
//       └── file2.txt
//
//   Total number of files: 2
// =============================================================================

mod node;
mod render;

pub use render::print_tree;

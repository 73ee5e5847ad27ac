// src/github/mod.rs
// =============================================================================
// This module handles listing files from GitHub repositories.
//
// Currently implements:
// - One call to the Git Trees API (recursive) per run
// - Waiting out exhausted rate limits and retrying the same call
// - Parsing GitHub URLs to extract owner/repo
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod error;
mod fetch;
mod models;

// Re-export what main.rs and the prompt module need
pub use fetch::{parse_github_url, TreeFetcher, DEFAULT_API_URL};
pub use models::RepoRequest;

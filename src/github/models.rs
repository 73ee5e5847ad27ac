// src/github/models.rs
// =============================================================================
// Data types shared by the fetcher: what we ask for (RepoRequest) and what
// the GitHub "get a tree" endpoint sends back (TreeResponse / TreeEntry).
//
// Endpoint:
//   GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1
// =============================================================================

use serde::Deserialize;
use std::fmt;

/// Which repository snapshot to list.
#[derive(Clone, PartialEq, Eq)]
pub struct RepoRequest {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub token: Option<String>,
}

// Hand-written so tokens never end up in debug logs
impl fmt::Debug for RepoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoRequest")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Body of a successful trees response.
///
/// Only `tree` is required; `truncated` is set by GitHub when the listing
/// was too large to return in one response.
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// A single entry of the tree listing.
#[derive(Debug, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// The `type` field of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule
    Commit,
    #[serde(other)]
    Other,
}

impl TreeResponse {
    /// Paths of all blob entries, in the order GitHub listed them.
    pub fn blob_paths(self) -> Vec<String> {
        self.tree
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Blob)
            .map(|entry| entry.path)
            .collect()
    }
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag is optional. Whatever is not given on the command line is asked
// for interactively (see prompt.rs), so running `repo-tree` with no
// arguments behaves exactly like the interactive tool.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: "maybe given, maybe not" for each flag
// =============================================================================

use crate::github::DEFAULT_API_URL;
use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug, Default)]
#[command(
    name = "repo-tree",
    version,
    about = "Print every file of a GitHub repository as a directory tree",
    long_about = "repo-tree lists all files of a GitHub repository branch through the GitHub API \
                  and prints them as an indented tree, followed by the total number of files. \
                  Anything not passed as a flag is prompted for."
)]
pub struct Cli {
    /// Repository owner (user or organization)
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Full repository URL instead of --owner/--repo
    ///
    /// Example: https://github.com/rust-lang/rust
    #[arg(long, conflicts_with_all = ["owner", "repo"])]
    pub url: Option<String>,

    /// Branch to list (prompted for, defaulting to "main")
    #[arg(long)]
    pub branch: Option<String>,

    /// Personal access token (raises the rate limit, unlocks private repos)
    #[arg(long)]
    pub token: Option<String>,

    /// Base URL of the GitHub API (for GitHub Enterprise: https://host/api/v3)
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Stop after this many rate-limit retries (default: keep retrying)
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so it never mixes with the tree on stdout)
// 3. Ask for whatever inputs were not passed as flags
// 4. Fetch the repository's file list from GitHub
// 5. Print it as a tree, followed by the total number of files
//
// Any failure is printed as its message and the program exits normally.
//
// Rust concepts used:
// - async/await: The HTTP request and the rate-limit wait are async
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod github; // src/github/ - fetching the file list from the GitHub API
mod prompt; // src/prompt.rs - interactive input
mod tree; // src/tree/ - building and printing the directory tree

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use tracing::Level;

// Everything runs on one thread; the only thing we ever wait on is the
// single request (and, when rate limited, the sleep before retrying it)
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        println!("{:#}", e);
    }
}

// Sends tracing events to stderr. Quiet unless something looks wrong,
// everything down to debug with --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// This is the main application logic
async fn run(cli: Cli) -> Result<()> {
    let request = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        prompt::collect(&cli, &mut input, &mut output)?
    };

    tracing::debug!(?request, api = %cli.api_url, "collected inputs");

    let fetcher = github::TreeFetcher::new(&cli.api_url, cli.max_retries)?;
    let paths = fetcher.fetch(&request).await?;

    tree::print_tree(paths)?;

    Ok(())
}

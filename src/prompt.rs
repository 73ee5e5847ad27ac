// src/prompt.rs
// =============================================================================
// Collects the four inputs the fetcher needs: owner, repository name,
// branch and an optional token.
//
// Values passed as flags are used as-is; everything else is asked for on
// the terminal, in that order. Reading and writing go through generic
// BufRead/Write so tests can feed canned input.
// =============================================================================

use crate::cli::Cli;
use crate::github::{parse_github_url, RepoRequest};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

const DEFAULT_BRANCH: &str = "main";

/// Builds a RepoRequest from flags, prompting for whatever is missing.
pub fn collect<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<RepoRequest> {
    let (owner, repo) = match &cli.url {
        Some(url) => parse_github_url(url)?,
        None => {
            let owner = given_or_ask(&cli.owner, "Enter the GitHub repository owner: ", input, output)?;
            let repo = given_or_ask(&cli.repo, "Enter the GitHub repository name: ", input, output)?;
            (owner, repo)
        }
    };

    if owner.is_empty() {
        bail!("Repository owner must not be empty");
    }
    if repo.is_empty() {
        bail!("Repository name must not be empty");
    }

    let branch = given_or_ask(
        &cli.branch,
        "Enter the branch to retrieve files from (default: main): ",
        input,
        output,
    )?;
    let branch = if branch.is_empty() { DEFAULT_BRANCH.to_string() } else { branch };

    let token = given_or_ask(&cli.token, "Enter your personal access token (optional): ", input, output)?;
    let token = if token.is_empty() { None } else { Some(token) };

    Ok(RepoRequest {
        owner,
        repo,
        branch,
        token,
    })
}

fn given_or_ask<R: BufRead, W: Write>(
    given: &Option<String>,
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => ask(question, input, output),
    }
}

// Prints the question and reads one line. End of input reads as blank.
fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", question).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read line")?;

    Ok(line.trim().to_string())
}

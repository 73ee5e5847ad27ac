// src/github/fetch.rs
// =============================================================================
// This module lists every file in a GitHub repository with a single call to
// the Git Trees API.
//
// Strategy:
// - Build GET {api}/repos/{owner}/{repo}/git/trees/{branch}?recursive=1
// - Send it (with "Authorization: token ..." when we have a token)
// - 200: keep only "blob" entries (files), in the order GitHub sent them
// - 403 with X-RateLimit-Remaining: 0: sleep until X-RateLimit-Reset,
//   then send the exact same request again
// - Anything else: give up with the status code and body
//
// The retry is a plain loop rather than recursion, and the sleep goes through
// the Sleeper trait so tests never actually wait.
//
// Rust concepts:
// - Generics with a default type parameter (TreeFetcher<S = TokioSleeper>)
// - Trait objects for futures (BoxFuture)
// - Pure functions for the decision logic, async only around the I/O
// =============================================================================

use super::error::FetchError;
use super::models::{RepoRequest, TreeResponse};
use anyhow::{anyhow, Result};
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use url::Url;

/// Public GitHub API. GitHub Enterprise lives under `https://host/api/v3`.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Something that can pause the fetcher for a while.
///
/// Production code uses [`TokioSleeper`]; tests plug in a recorder.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[derive(Debug)]
enum Outcome {
    Listing(TreeResponse),
    RateLimited(Duration),
    Failed(FetchError),
}

/// Fetches repository listings from the Git Trees API.
pub struct TreeFetcher<S = TokioSleeper> {
    client: Client,
    api_base: Url,
    max_retries: Option<u32>,
    sleeper: S,
}

impl TreeFetcher<TokioSleeper> {
    /// Creates a fetcher that really sleeps when rate limited.
    ///
    /// `max_retries: None` keeps retrying for as long as GitHub keeps
    /// answering with an exhausted rate limit.
    pub fn new(api_base: &str, max_retries: Option<u32>) -> Result<Self, FetchError> {
        Self::with_sleeper(api_base, max_retries, TokioSleeper)
    }
}

impl<S: Sleeper> TreeFetcher<S> {
    pub fn with_sleeper(api_base: &str, max_retries: Option<u32>, sleeper: S) -> Result<Self, FetchError> {
        let api_base = Url::parse(api_base)?;
        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        // GitHub rejects requests that carry no User-Agent
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repo-tree/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let builder = Client::builder().default_headers(headers);
        // Tests talk to a loopback server; keep proxy settings out of it
        #[cfg(test)]
        let builder = builder.no_proxy();
        let client = builder.build()?;

        Ok(Self {
            client,
            api_base,
            max_retries,
            sleeper,
        })
    }

    /// The trees endpoint for `request`, keeping any path prefix of the API base.
    pub fn trees_url(&self, request: &RepoRequest) -> Url {
        let base_path = self.api_base.path().trim_end_matches('/');
        let path = format!(
            "{}/repos/{}/{}/git/trees/{}",
            base_path, request.owner, request.repo, request.branch
        );

        let mut url = self.api_base.clone();
        url.set_path(&path);
        url.set_query(Some("recursive=1"));
        url
    }

    /// Returns the path of every file in the repository at `request.branch`.
    ///
    /// Paths come back in the order the API listed them (not sorted).
    pub async fn fetch(&self, request: &RepoRequest) -> Result<Vec<String>, FetchError> {
        let url = self.trees_url(request);
        let mut retries = 0u32;

        loop {
            tracing::debug!(%url, attempt = retries + 1, "requesting repository tree");

            let mut builder = self.client.get(url.clone());
            if let Some(token) = &request.token {
                builder = builder.header(AUTHORIZATION, format!("token {}", token));
            }

            let response = builder.send().await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.text().await?;

            tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

            match classify_response(status, &headers, &body, SystemTime::now()) {
                Outcome::Listing(listing) => {
                    if listing.truncated {
                        tracing::warn!(
                            owner = %request.owner,
                            repo = %request.repo,
                            "GitHub truncated the tree listing; some files are missing"
                        );
                    }

                    let paths = listing.blob_paths();
                    tracing::debug!(files = paths.len(), "collected blob paths");
                    return Ok(paths);
                }
                Outcome::RateLimited(wait) => {
                    if let Some(max) = self.max_retries {
                        if retries >= max {
                            return Err(FetchError::RetriesExhausted { retries });
                        }
                    }

                    println!("Rate limit exceeded. Waiting for {:.1} seconds.", wait.as_secs_f64());
                    self.sleeper.sleep(wait).await;
                    retries += 1;
                }
                Outcome::Failed(error) => return Err(error),
            }
        }
    }
}

// Decides what a single response means for the retry loop. No I/O.
fn classify_response(status: StatusCode, headers: &HeaderMap, body: &str, now: SystemTime) -> Outcome {
    if status == StatusCode::OK {
        return match serde_json::from_str::<TreeResponse>(body) {
            Ok(listing) => Outcome::Listing(listing),
            Err(e) => Outcome::Failed(FetchError::Malformed(e.to_string())),
        };
    }

    if status == StatusCode::FORBIDDEN && header_number(headers, RATE_LIMIT_REMAINING) == Some(0) {
        if let Some(reset) = header_number(headers, RATE_LIMIT_RESET) {
            return Outcome::RateLimited(wait_until(reset, now));
        }
        tracing::warn!("rate limit exhausted but the reset header is missing or unreadable");
    }

    Outcome::Failed(FetchError::Http {
        status: status.as_u16(),
        body: body.to_string(),
    })
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

// max(reset - now, 0)
fn wait_until(reset_timestamp: i64, now: SystemTime) -> Duration {
    let Ok(reset_secs) = u64::try_from(reset_timestamp) else {
        return Duration::ZERO;
    };

    (UNIX_EPOCH + Duration::from_secs(reset_secs))
        .duration_since(now)
        .unwrap_or(Duration::ZERO)
}

// Parses a GitHub URL to extract owner and repository name
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/src (extra segments ignored)
//   - github.com/owner/repo
//
// Example:
//   "https://github.com/rust-lang/rust" -> ("rust-lang", "rust")
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    // Remove common prefixes
    let trimmed = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");

    let path = trimmed
        .strip_prefix("github.com/")
        .ok_or_else(|| anyhow!("Not a GitHub URL: {}", url))?;

    let mut parts = path.split('/').filter(|part| !part.is_empty());

    let owner = parts.next();
    let repo = parts.next().map(|repo| repo.trim_end_matches(".git"));

    match (owner, repo) {
        (Some(owner), Some(repo)) if !repo.is_empty() => Ok((owner.to_string(), repo.to_string())),
        _ => Err(anyhow!("Invalid GitHub URL format: {}", url)),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a loop instead of calling fetch() again?
//    - Calling an async fn from itself needs boxing, and every retry would
//      keep the previous call frame alive
//    - A loop re-sends the same request with no extra bookkeeping
//
// 2. What is BoxFuture<'static, ()>?
//    - A heap-allocated future that produces () when awaited
//    - Traits cannot easily have async methods that work with every
//      implementation, so the trait method returns a boxed future instead
//
// 3. What does `let Ok(x) = ... else { ... };` do?
//    - let-else: bind if the pattern matches, otherwise run the else block
//    - The else block must leave the function (return, break, panic)
// -----------------------------------------------------------------------------

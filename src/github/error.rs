// src/github/error.rs
// =============================================================================
// Everything that can go wrong while fetching a repository listing.
//
// Being rate limited is not in here: the fetcher handles that itself by
// waiting and retrying. It only becomes an error when a retry cap is set
// and used up.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Any non-200 response that is not a rate limit (404, 500, ...).
    /// Never retried.
    #[error("Failed to retrieve files: \n{status} - {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Request to GitHub failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A 200 response whose body is not the expected tree JSON.
    #[error("Malformed response from GitHub API: {0}")]
    Malformed(String),

    /// The configured API base (or a path built on it) is not a valid URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// `--max-retries` was set and the rate limit outlasted it.
    #[error("Rate limit still exceeded after {retries} retries")]
    RetriesExhausted { retries: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_has_status_and_body() {
        let error = FetchError::Http {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Failed to retrieve files: \n404 - {\"message\":\"Not Found\"}"
        );
    }
}
